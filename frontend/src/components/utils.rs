use super::super::{Model, Msg};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Only one file is staged at a time; extra files in a selection are ignored.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

pub fn render_error_message(message: Option<&str>) -> Html {
    if let Some(error_msg) = message {
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

pub fn render_reset_button(model: &Model, ctx: &Context<Model>) -> Html {
    if !model.state.has_content() {
        return html! {};
    }

    let link = ctx.link().clone();
    html! {
        <div class="reset-container">
            <button
                class="reset-btn"
                onclick={debounce(300, move || link.send_message(Msg::Reset))}
            >
                <i class="fa-solid fa-rotate-right"></i>{" Refresh"}
            </button>
        </div>
    }
}
