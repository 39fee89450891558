use super::upload_section::{UploadMsg, UploadPage};
use crate::api::SelectedImage;
use futures::future::abortable;
use gloo_file::{File as GlooFile, ObjectUrl};
use smartseg_shared::{
    Classifier, DetectionPayload, RequestFailure, RequestTicket, SubmitAction,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_file_selected(page: &mut UploadPage, file: GlooFile) -> bool {
    page.preview_url = Some(ObjectUrl::from(file.clone()));
    page.controller.select_file(SelectedImage::from(file));
    true
}

pub fn handle_submit(page: &mut UploadPage, ctx: &Context<UploadPage>) -> bool {
    match page.controller.begin_submit() {
        SubmitAction::Ignored => false,
        SubmitAction::Rejected(_) => true,
        SubmitAction::Dispatch { ticket, file } => {
            send_detection_request(page, ctx, ticket, file);
            true
        }
    }
}

pub fn handle_completed(
    page: &mut UploadPage,
    ctx: &Context<UploadPage>,
    ticket: RequestTicket,
    result: Result<DetectionPayload, RequestFailure>,
) -> bool {
    page.abort = None;
    if let Some(payload) = page.controller.complete(ticket, result) {
        ctx.props().on_detected.emit(payload);
    }
    true
}

/// Aborts whatever is still in flight when the view goes away.
pub fn handle_teardown(page: &mut UploadPage) {
    if let Some(handle) = page.abort.take() {
        handle.abort();
    }
    page.controller.cancel();
}

pub fn send_detection_request(
    page: &mut UploadPage,
    ctx: &Context<UploadPage>,
    ticket: RequestTicket,
    file: SelectedImage,
) {
    let classifier = page.classifier.clone();
    let (request, handle) = abortable(async move { classifier.classify(file).await });
    page.abort = Some(handle);

    let link = ctx.link().clone();
    spawn_local(async move {
        match request.await {
            Ok(result) => link.send_message(UploadMsg::Completed(ticket, result)),
            Err(_) => log::debug!("Request {} aborted", ticket.id()),
        }
    });
}
