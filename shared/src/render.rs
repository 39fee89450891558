use crate::payload::DetectionPayload;
use crate::route::Route;

pub const NO_DATA_NOTICE: &str = "No data available.";
pub const GO_BACK_LABEL: &str = "Go Back";
pub const UPLOAD_ANOTHER_LABEL: &str = "Upload Another Image";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DETAILS: &str = "No details available.";
pub const NO_OBJECTS: &str = "No objects detected.";

/// Link back to the submission view. Following it always starts a fresh submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackLink {
    pub label: &'static str,
    pub target: Route,
}

impl BackLink {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            target: Route::Submission,
        }
    }
}

/// Everything the result view shows, borrowed from the payload it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView<'a> {
    Empty { notice: &'static str, back: BackLink },
    Report(Report<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<'a> {
    pub uploaded_image_url: &'a str,
    pub waste_type: &'a str,
    pub description: &'a str,
    pub disposal_advice: &'a str,
    /// Present only for waste verdicts.
    pub findings: Option<FindingsView<'a>>,
    pub back: BackLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingsView<'a> {
    pub output_image_url: Option<&'a str>,
    pub detected_objects: String,
    pub model_used: &'a str,
}

/// Blank text counts as missing; anything else is shown exactly as sent.
fn or_placeholder<'a>(value: Option<&'a String>, placeholder: &'static str) -> &'a str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => placeholder,
    }
}

fn join_objects(objects: &[String]) -> String {
    if objects.is_empty() {
        NO_OBJECTS.to_string()
    } else {
        objects.join(", ")
    }
}

/// Builds the result view for an optional payload. Pure: the payload is only read.
pub fn render(payload: Option<&DetectionPayload>) -> ResultView<'_> {
    let Some(payload) = payload else {
        log::debug!("result view opened without a payload");
        return ResultView::Empty {
            notice: NO_DATA_NOTICE,
            back: BackLink::new(GO_BACK_LABEL),
        };
    };

    let verdict = payload.verdict();
    let findings = payload.findings().map(|findings| FindingsView {
        output_image_url: findings.output_image_url.as_deref(),
        detected_objects: join_objects(&findings.detected_objects),
        model_used: or_placeholder(findings.model_used.as_ref(), NOT_AVAILABLE),
    });

    ResultView::Report(Report {
        uploaded_image_url: payload.uploaded_image_url(),
        waste_type: or_placeholder(verdict.waste_type.as_ref(), NOT_AVAILABLE),
        description: or_placeholder(verdict.description.as_ref(), NO_DETAILS),
        disposal_advice: or_placeholder(verdict.disposal_advice.as_ref(), NOT_AVAILABLE),
        findings,
        back: BackLink::new(UPLOAD_ANOTHER_LABEL),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{ClassificationVerdict, WasteFindings};
    use rstest::rstest;

    fn verdict(waste_type: &str, description: &str, advice: &str) -> ClassificationVerdict {
        ClassificationVerdict {
            waste_type: Some(waste_type.into()),
            description: Some(description.into()),
            disposal_advice: Some(advice.into()),
        }
    }

    fn report<'a>(view: &'a ResultView<'a>) -> &'a Report<'a> {
        match view {
            ResultView::Report(report) => report,
            ResultView::Empty { .. } => panic!("expected a report"),
        }
    }

    #[test]
    fn absent_payload_renders_only_the_notice() {
        assert_eq!(
            render(None),
            ResultView::Empty {
                notice: "No data available.",
                back: BackLink {
                    label: "Go Back",
                    target: Route::Submission,
                },
            }
        );
    }

    #[test]
    fn non_waste_hides_findings() {
        let payload = DetectionPayload::not_waste("u1", verdict("none", "clean", "n/a"));
        let view = render(Some(&payload));
        let report = report(&view);

        assert_eq!(report.uploaded_image_url, "u1");
        assert_eq!(report.waste_type, "none");
        assert_eq!(report.description, "clean");
        assert_eq!(report.disposal_advice, "n/a");
        assert!(report.findings.is_none());
        assert_eq!(report.back.label, "Upload Another Image");
        assert_eq!(report.back.target, Route::Submission);
    }

    #[test]
    fn non_waste_ignores_stray_wire_fields() {
        let payload = DetectionPayload::from_json(
            r#"{"gemini_result":{"is_waste":false},"uploaded_image_url":"u1",
                "output_image_url":"o1","detected_objects":["bottle"],"model_used":"m1"}"#,
        )
        .unwrap();

        assert!(report(&render(Some(&payload))).findings.is_none());
    }

    #[test]
    fn waste_shows_findings() {
        let payload = DetectionPayload::waste(
            "u1",
            verdict("Non-Biodegradable Waste", "plastic and metal", "recycle"),
            WasteFindings {
                output_image_url: Some("o1".into()),
                detected_objects: vec!["bottle".into(), "can".into()],
                model_used: Some("m1".into()),
            },
        );
        let view = render(Some(&payload));

        assert_eq!(
            report(&view).findings,
            Some(FindingsView {
                output_image_url: Some("o1"),
                detected_objects: "bottle, can".into(),
                model_used: "m1",
            })
        );
    }

    #[test]
    fn waste_without_objects_uses_placeholder() {
        let payload = DetectionPayload::waste("u1", verdict("E-waste", "d", "a"), WasteFindings::default());
        let view = render(Some(&payload));
        let findings = report(&view).findings.clone().unwrap();

        assert_eq!(findings.detected_objects, "No objects detected.");
        assert_eq!(findings.model_used, "N/A");
        assert_eq!(findings.output_image_url, None);
    }

    #[rstest]
    #[case(None, None, None, "N/A", "No details available.", "N/A")]
    #[case(Some(""), Some("  "), Some(""), "N/A", "No details available.", "N/A")]
    #[case(Some("E-waste"), None, Some("recycle"), "E-waste", "No details available.", "recycle")]
    fn verdict_placeholders(
        #[case] waste_type: Option<&str>,
        #[case] description: Option<&str>,
        #[case] advice: Option<&str>,
        #[case] expected_type: &str,
        #[case] expected_description: &str,
        #[case] expected_advice: &str,
    ) {
        let payload = DetectionPayload::not_waste(
            "u1",
            ClassificationVerdict {
                waste_type: waste_type.map(String::from),
                description: description.map(String::from),
                disposal_advice: advice.map(String::from),
            },
        );
        let view = render(Some(&payload));
        let report = report(&view);

        assert_eq!(report.waste_type, expected_type);
        assert_eq!(report.description, expected_description);
        assert_eq!(report.disposal_advice, expected_advice);
    }

    #[test]
    fn verdict_text_is_shown_verbatim() {
        let payload = DetectionPayload::waste(
            "u1",
            verdict("  E-waste\n", " cracked screen ", "\tdrop-off point"),
            WasteFindings {
                model_used: Some(" YOLOv8 (E-waste) ".into()),
                ..Default::default()
            },
        );
        let view = render(Some(&payload));
        let report = report(&view);

        assert_eq!(report.waste_type, "  E-waste\n");
        assert_eq!(report.description, " cracked screen ");
        assert_eq!(report.disposal_advice, "\tdrop-off point");
        assert_eq!(report.findings.as_ref().unwrap().model_used, " YOLOv8 (E-waste) ");
    }

    #[test]
    fn rendering_leaves_payload_untouched() {
        let payload = DetectionPayload::waste("u1", verdict("t", "d", "a"), WasteFindings::default());
        let before = payload.clone();
        let _ = render(Some(&payload));
        assert_eq!(payload, before);
    }
}
