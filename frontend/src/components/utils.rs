use super::super::Model;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::FileList;
use yew::prelude::*;

pub const FILE_INPUT_ID: &str = "file-input";

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

/// Only one image is analysed at a time, so extra files are ignored. The type
/// check happens later so a non-image still produces a notice.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

pub fn open_file_picker() {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(FILE_INPUT_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());

    match input {
        Some(input) => input.click(),
        None => log::warn!("File input #{} not found", FILE_INPUT_ID),
    }
}

/// Shows the pending notice, or else the session's network error.
pub fn render_error_message(model: &Model) -> Html {
    let message = model
        .notice
        .clone()
        .or_else(|| model.session.error_message());

    if let Some(error_msg) = message {
        html! {
            <div class="error-message">
                <p>{ format!("⚠️ {}", error_msg) }</p>
            </div>
        }
    } else {
        html! {}
    }
}
