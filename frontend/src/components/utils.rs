use gloo_file::File as GlooFile;
use web_sys::FileList;
use yew::prelude::*;

/// First file of the picker's selection. Its type is not checked here; the picker's
/// `accept` filter is the only restriction.
pub fn first_selected_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

pub fn render_error_message(error: Option<&str>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
