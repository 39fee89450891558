use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use smartseg_shared::{
    Classifier, ClientConfig, DetectionPayload, ImageFile, RequestFailure, decode_response,
    with_deadline,
};

/// An image picked in the browser.
#[derive(Clone, Debug)]
pub struct SelectedImage(GlooFile);

impl From<GlooFile> for SelectedImage {
    fn from(file: GlooFile) -> Self {
        Self(file)
    }
}

impl ImageFile for SelectedImage {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size()
    }
}

/// Posts images to the detection endpoint as multipart form data.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpClassifier {
    endpoint: String,
    timeout_secs: u64,
    timeout_millis: u32,
}

impl HttpClassifier {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.endpoint.to_string(),
            timeout_secs: config.timeout.as_secs(),
            timeout_millis: config.timeout_millis(),
        }
    }

    async fn send(&self, image: &SelectedImage) -> Result<DetectionPayload, RequestFailure> {
        let file: &web_sys::File = image.0.as_ref();
        let form_data = web_sys::FormData::new()
            .map_err(|e| RequestFailure::Network(format!("{:?}", e)))?;
        form_data
            .append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| RequestFailure::Network(format!("{:?}", e)))?;

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| RequestFailure::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| RequestFailure::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestFailure::Malformed(e.to_string()));
        decode_response(status, body)
    }
}

impl Classifier<SelectedImage> for HttpClassifier {
    async fn classify(&self, image: SelectedImage) -> Result<DetectionPayload, RequestFailure> {
        with_deadline(
            self.send(&image),
            TimeoutFuture::new(self.timeout_millis),
            self.timeout_secs,
        )
        .await
    }
}
