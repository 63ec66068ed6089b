use super::super::{Model, Msg};
use shared::UploadMode;
use strum::IntoEnumIterator;
use yew::html::Scope;
use yew::prelude::*;

fn nav_label(mode: UploadMode) -> (&'static str, &'static str, &'static str) {
    match mode {
        UploadMode::Single => ("fa-solid fa-camera", "Single Image", "Upload Single Image"),
        UploadMode::Zip => ("fa-solid fa-file-zipper", "ZIP File", "Upload ZIP Archive"),
        UploadMode::Video => ("fa-solid fa-video", "Video", "Upload Video File"),
    }
}

pub fn render_sidebar(current: UploadMode, link: &Scope<Model>) -> Html {
    html! {
        <nav class="sidebar">
            <ul class="nav-list">
                { for UploadMode::iter().map(|mode| {
                    let (icon, label, tooltip) = nav_label(mode);
                    html! {
                        <li class="nav-item" key={mode.to_string()}>
                            <button
                                class={classes!("nav-btn", (mode == current).then_some("active-nav"))}
                                title={tooltip}
                                onclick={link.callback(move |_| Msg::SwitchMode(mode))}
                            >
                                <i class={icon}></i>
                                <span class="link-name">{ label }</span>
                            </button>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
