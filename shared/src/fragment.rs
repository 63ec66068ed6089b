//! Reading of the HTML fragments the video endpoint returns.
//!
//! The fragments look like `<a href="…"><img src="…" width="100"/></a>`. They
//! are treated as untrusted text: the only thing taken from them is the `src`
//! of the first `<img>` element, and only with a scheme that can be shown as an
//! image. Nothing from them is ever rendered as markup.

use scraper::{Html, Selector};

const ALLOWED_SCHEMES: &[&str] = &["data:image/", "https://", "http://"];

/// Source of the first `<img>` in `fragment`, or `None` when the fragment has
/// no image or the image points somewhere unsafe.
pub fn extract_image_src(fragment: &str) -> Option<String> {
    let selector = Selector::parse("img[src]").ok()?;
    let document = Html::parse_fragment(fragment);

    let src = document.select(&selector).next()?.value().attr("src")?.trim();
    is_allowed(src).then(|| src.to_string())
}

fn is_allowed(src: &str) -> bool {
    let lower = src.to_ascii_lowercase();
    ALLOWED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}
