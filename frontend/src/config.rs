use shared::ClientConfig;

const QUERY_PARAM: &str = "api";

/// Resolves the API base URL: `?api=` on the current page, then
/// `CRACK_API_BASE_URL` at build time, then the default. The query value is
/// never remembered across visits.
pub fn load() -> ClientConfig {
    let from_query = query_param(QUERY_PARAM);

    ClientConfig::resolve([from_query.as_deref(), option_env!("CRACK_API_BASE_URL")])
}

fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}
