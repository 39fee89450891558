use crate::payload::DetectionPayload;

/// One-shot handoff of a payload from the submission view to the next result view.
///
/// Holds at most one payload, in memory only. `take` empties it, so a later visit to
/// the result view (reload, history navigation) finds nothing.
#[derive(Debug, Default)]
pub struct ViewTransfer {
    slot: Option<DetectionPayload>,
}

impl ViewTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `payload` available to the next `take`, replacing anything unclaimed.
    pub fn send(&mut self, payload: DetectionPayload) {
        if self.slot.replace(payload).is_some() {
            log::debug!("unclaimed payload replaced in view transfer");
        }
    }

    pub fn take(&mut self) -> Option<DetectionPayload> {
        self.slot.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::ClassificationVerdict;

    fn payload(url: &str) -> DetectionPayload {
        DetectionPayload::not_waste(url, ClassificationVerdict::default())
    }

    #[test]
    fn delivers_exactly_once() {
        let mut transfer = ViewTransfer::new();
        transfer.send(payload("u1"));

        assert_eq!(transfer.take(), Some(payload("u1")));
        assert_eq!(transfer.take(), None);
    }

    #[test]
    fn empty_transfer_yields_nothing() {
        assert_eq!(ViewTransfer::new().take(), None);
    }

    #[test]
    fn later_send_wins() {
        let mut transfer = ViewTransfer::new();
        transfer.send(payload("u1"));
        transfer.send(payload("u2"));
        assert_eq!(transfer.take(), Some(payload("u2")));
        assert_eq!(transfer.take(), None);
    }
}
