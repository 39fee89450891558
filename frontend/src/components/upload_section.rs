use super::handlers;
use super::utils::{first_selected_file, render_error_message};
use crate::api::{HttpClassifier, SelectedImage};
use futures::future::AbortHandle;
use gloo_file::{File as GlooFile, ObjectUrl};
use smartseg_shared::{ClientConfig, DetectionPayload, RequestFailure, RequestTicket, SubmissionController};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadProps {
    pub config: Rc<ClientConfig>,
    pub on_detected: Callback<DetectionPayload>,
}

pub enum UploadMsg {
    FileSelected(GlooFile),
    Submit,
    Completed(RequestTicket, Result<DetectionPayload, RequestFailure>),
}

/// The submission view. Each mount starts with no file and no error.
pub struct UploadPage {
    pub(crate) controller: SubmissionController<SelectedImage>,
    pub(crate) classifier: HttpClassifier,
    pub(crate) preview_url: Option<ObjectUrl>,
    pub(crate) abort: Option<AbortHandle>,
}

impl Component for UploadPage {
    type Message = UploadMsg;
    type Properties = UploadProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;
        Self {
            controller: SubmissionController::from_config(config),
            classifier: HttpClassifier::new(config),
            preview_url: None,
            abort: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            UploadMsg::FileSelected(file) => handlers::handle_file_selected(self, file),
            UploadMsg::Submit => handlers::handle_submit(self, ctx),
            UploadMsg::Completed(ticket, result) => {
                handlers::handle_completed(self, ctx, ticket, result)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let in_flight = self.controller.is_in_flight();

        let handle_change = link.batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().as_ref().and_then(first_selected_file);
            input.set_value("");
            file.map(UploadMsg::FileSelected)
        });

        html! {
            <div class="upload-section">
                <div class="upload-card">
                    <h2 class="upload-title">{"Upload an Image for Detection"}</h2>

                    { self.render_preview() }

                    <label for="file-input" class="choose-btn">
                        <i class="fa-solid fa-upload"></i>{" Choose File"}
                    </label>
                    <input
                        type="file"
                        id="file-input"
                        accept="image/*"
                        style="display: none;"
                        onchange={handle_change}
                    />

                    <button
                        class="analyze-btn"
                        onclick={link.callback(|_| UploadMsg::Submit)}
                        disabled={in_flight}
                    >
                        {
                            if in_flight {
                                html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                            } else {
                                html! { "Analyze" }
                            }
                        }
                    </button>

                    { render_error_message(self.controller.error_message().as_deref()) }
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        handlers::handle_teardown(self);
    }
}

impl UploadPage {
    fn render_preview(&self) -> Html {
        match &self.preview_url {
            Some(url) => html! {
                <img class="upload-preview" src={url.to_string()} alt="preview" />
            },
            None => html! {},
        }
    }
}
