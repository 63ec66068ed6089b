use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-building-circle-check"></i> {" Crack Detection System"}</h1>
            <p class="subtitle">{"AI-Powered Structural Analysis"}</p>
        </header>
    }
}
