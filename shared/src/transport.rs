use crate::error::RequestFailure;
use crate::payload::DetectionPayload;
use futures::future::{Either, select};
use futures::pin_mut;
use std::future::Future;

/// Maps a finished HTTP exchange onto the request contract: any non-2xx status is a
/// failure carrying the body text, a 2xx body must decode as a payload.
pub fn decode_response(
    status: u16,
    body: Result<String, RequestFailure>,
) -> Result<DetectionPayload, RequestFailure> {
    if !(200..300).contains(&status) {
        return Err(RequestFailure::Status {
            status,
            body: body.unwrap_or_default(),
        });
    }
    Ok(DetectionPayload::from_json(&body?)?)
}

/// Races `request` against `deadline`; the deadline firing first is a timeout.
pub async fn with_deadline<T, R, D>(
    request: R,
    deadline: D,
    timeout_secs: u64,
) -> Result<T, RequestFailure>
where
    R: Future<Output = Result<T, RequestFailure>>,
    D: Future<Output = ()>,
{
    pin_mut!(request, deadline);
    match select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            log::warn!("Request timed out after {}s", timeout_secs);
            Err(RequestFailure::Timeout(timeout_secs))
        }
    }
}
