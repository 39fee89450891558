use crate::error::PayloadError;
use serde::Deserialize;

/// Verdict text returned by the classification service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationVerdict {
    pub waste_type: Option<String>,
    pub description: Option<String>,
    pub disposal_advice: Option<String>,
}

/// Detection output that only exists for images classified as waste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WasteFindings {
    pub output_image_url: Option<String>,
    pub detected_objects: Vec<String>,
    pub model_used: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    NotWaste,
    Waste(WasteFindings),
}

/// Result of one successful classification request.
///
/// Fields are private: a payload is built once from the service response and only read
/// afterwards; see [`DetectionPayload::from_json`] for the service's JSON shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionPayload {
    uploaded_image_url: String,
    verdict: ClassificationVerdict,
    outcome: Outcome,
}

impl DetectionPayload {
    pub fn not_waste(uploaded_image_url: impl Into<String>, verdict: ClassificationVerdict) -> Self {
        Self {
            uploaded_image_url: uploaded_image_url.into(),
            verdict,
            outcome: Outcome::NotWaste,
        }
    }

    pub fn waste(
        uploaded_image_url: impl Into<String>,
        verdict: ClassificationVerdict,
        findings: WasteFindings,
    ) -> Self {
        Self {
            uploaded_image_url: uploaded_image_url.into(),
            verdict,
            outcome: Outcome::Waste(findings),
        }
    }

    /// Decodes a response body. Anything that is not the expected JSON object is an error.
    pub fn from_json(body: &str) -> Result<Self, PayloadError> {
        let wire: WireDetection =
            serde_json::from_str(body).map_err(|e| PayloadError::Json(e.to_string()))?;
        Self::try_from(wire)
    }

    pub fn uploaded_image_url(&self) -> &str {
        &self.uploaded_image_url
    }

    pub fn verdict(&self) -> &ClassificationVerdict {
        &self.verdict
    }

    pub fn is_waste(&self) -> bool {
        matches!(self.outcome, Outcome::Waste(_))
    }

    pub fn findings(&self) -> Option<&WasteFindings> {
        match &self.outcome {
            Outcome::Waste(findings) => Some(findings),
            Outcome::NotWaste => None,
        }
    }
}

#[derive(Deserialize)]
struct WireVerdict {
    #[serde(default)]
    is_waste: Option<bool>,
    #[serde(default)]
    waste_type: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    disposal_advice: Option<String>,
}

#[derive(Deserialize)]
struct WireDetection {
    #[serde(default)]
    uploaded_image_url: Option<String>,
    #[serde(default)]
    output_image_url: Option<String>,
    #[serde(default)]
    gemini_result: Option<WireVerdict>,
    #[serde(default)]
    detected_objects: Option<Vec<String>>,
    #[serde(default)]
    model_used: Option<String>,
}

impl TryFrom<WireDetection> for DetectionPayload {
    type Error = PayloadError;

    fn try_from(wire: WireDetection) -> Result<Self, Self::Error> {
        let uploaded_image_url = wire
            .uploaded_image_url
            .ok_or(PayloadError::MissingField("uploaded_image_url"))?;
        let gemini = wire
            .gemini_result
            .ok_or(PayloadError::MissingField("gemini_result"))?;

        let verdict = ClassificationVerdict {
            waste_type: gemini.waste_type,
            description: gemini.description,
            disposal_advice: gemini.disposal_advice,
        };

        // The service sends `null` when it could not read its own verdict.
        let outcome = if gemini.is_waste.unwrap_or(false) {
            Outcome::Waste(WasteFindings {
                output_image_url: wire.output_image_url,
                detected_objects: wire.detected_objects.unwrap_or_default(),
                model_used: wire.model_used,
            })
        } else {
            Outcome::NotWaste
        };

        Ok(Self {
            uploaded_image_url,
            verdict,
            outcome,
        })
    }
}
