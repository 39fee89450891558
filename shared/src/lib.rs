//! Platform-independent core of the waste detection client: the service payload, the
//! submission workflow, the one-shot handoff to the result view and the result view model.

pub mod config;
pub mod error;
pub mod payload;
pub mod render;
pub mod route;
pub mod submission;
pub mod transfer;
pub mod transport;

pub use config::ClientConfig;
pub use error::{ConfigError, PayloadError, RequestFailure, SubmitError};
pub use payload::{ClassificationVerdict, DetectionPayload, WasteFindings};
pub use render::{render, BackLink, FindingsView, Report, ResultView};
pub use route::Route;
pub use submission::{
    Classifier, ImageFile, RequestTicket, SubmissionController, SubmissionState, SubmitAction,
};
pub use transfer::ViewTransfer;
pub use transport::{decode_response, with_deadline};
