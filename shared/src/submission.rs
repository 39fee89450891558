use crate::config::ClientConfig;
use crate::error::{RequestFailure, SubmitError};
use crate::payload::DetectionPayload;
use std::future::Future;

/// A file handle chosen by the user. Only its metadata is inspected here; the bytes
/// travel untouched to the classifier.
pub trait ImageFile: Clone {
    fn name(&self) -> String;
    fn size(&self) -> u64;
}

/// Sends one image to the classification service.
pub trait Classifier<F> {
    fn classify(&self, file: F) -> impl Future<Output = Result<DetectionPayload, RequestFailure>>;
}

/// Identifies one dispatched request, so a late completion can be recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting(RequestTicket),
    Succeeded,
    Failed(SubmitError),
}

/// What the caller must do after asking to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction<F> {
    /// Local validation failed; nothing may be sent.
    Rejected(SubmitError),
    /// A request is already outstanding.
    Ignored,
    /// Send `file` and report back with `ticket`.
    Dispatch { ticket: RequestTicket, file: F },
}

/// File selection and request lifecycle of the submission view.
///
/// Single-flight: while a request is outstanding every further submit is dropped.
/// Failures are terminal for their attempt and never retried.
#[derive(Debug)]
pub struct SubmissionController<F> {
    selected: Option<F>,
    state: SubmissionState,
    max_upload_bytes: Option<u64>,
    next_ticket: u64,
}

impl<F: ImageFile> SubmissionController<F> {
    pub fn new(max_upload_bytes: Option<u64>) -> Self {
        Self {
            selected: None,
            state: SubmissionState::Idle,
            max_upload_bytes,
            next_ticket: 0,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.max_upload_bytes)
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting(_))
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            SubmissionState::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }

    /// Replaces the selected file and clears any shown error. An outstanding request
    /// keeps running with the file it was sent with.
    pub fn select_file(&mut self, file: F) {
        log::info!("Selected file {} ({} bytes)", file.name(), file.size());
        self.selected = Some(file);
        if matches!(self.state, SubmissionState::Failed(_) | SubmissionState::Succeeded) {
            self.state = SubmissionState::Idle;
        }
    }

    pub fn begin_submit(&mut self) -> SubmitAction<F> {
        if let SubmissionState::Submitting(ticket) = self.state {
            log::debug!("Submit ignored, request {} still in flight", ticket.id());
            return SubmitAction::Ignored;
        }

        self.state = SubmissionState::Validating;
        let file = match self.validate() {
            Ok(file) => file,
            Err(err) => {
                log::warn!("Submission rejected: {}", err);
                self.state = SubmissionState::Failed(err.clone());
                return SubmitAction::Rejected(err);
            }
        };

        let ticket = RequestTicket(self.next_ticket);
        self.next_ticket += 1;
        self.state = SubmissionState::Submitting(ticket);
        log::info!("Dispatching request {} for {}", ticket.id(), file.name());

        SubmitAction::Dispatch { ticket, file }
    }

    fn validate(&self) -> Result<F, SubmitError> {
        let file = self.selected.clone().ok_or(SubmitError::NoFileSelected)?;
        if let Some(limit) = self.max_upload_bytes {
            let size = file.size();
            if size > limit {
                return Err(SubmitError::FileTooLarge { size, limit });
            }
        }
        Ok(file)
    }

    /// Applies the result of the request identified by `ticket`. Returns the payload to
    /// hand to the result view on success. Completions for any other ticket are dropped.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<DetectionPayload, RequestFailure>,
    ) -> Option<DetectionPayload> {
        if self.state != SubmissionState::Submitting(ticket) {
            log::debug!("Dropping stale completion for request {}", ticket.id());
            return None;
        }

        match result {
            Ok(payload) => {
                log::info!(
                    "Request {} succeeded (waste: {})",
                    ticket.id(),
                    payload.is_waste()
                );
                self.state = SubmissionState::Succeeded;
                Some(payload)
            }
            Err(failure) => {
                log::warn!("Request {} failed: {}", ticket.id(), failure);
                self.state = SubmissionState::Failed(SubmitError::Request(failure));
                None
            }
        }
    }

    /// Abandons the outstanding request, if any. Returns whether one was abandoned.
    pub fn cancel(&mut self) -> bool {
        match self.state {
            SubmissionState::Submitting(ticket) => {
                log::info!("Cancelled request {}", ticket.id());
                self.state = SubmissionState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Runs one full submit cycle against `classifier`.
    pub async fn submit<C: Classifier<F>>(&mut self, classifier: &C) -> Option<DetectionPayload> {
        let SubmitAction::Dispatch { ticket, file } = self.begin_submit() else {
            return None;
        };
        let result = classifier.classify(file).await;
        self.complete(ticket, result)
    }
}
