use crate::api::Endpoint;
use crate::error::ConfigError;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Where the detection API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".into()));
        }

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// First valid candidate wins, in priority order; invalid ones are logged
    /// and skipped. Falls back to the default base URL.
    pub fn resolve<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        for candidate in candidates.into_iter().flatten() {
            match Self::new(candidate) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring API base URL: {}", e),
            }
        }
        Self::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    pub fn report_preview_url(&self, crack_type: &str) -> String {
        format!(
            "{}?crack_type={}",
            self.endpoint_url(Endpoint::ReportPreview),
            urlencoding::encode(crack_type)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint_url(Endpoint::Predict), "http://localhost:8000/predict");
    }

    #[test]
    fn keeps_path_prefix_and_drops_trailing_slash() {
        let config = ClientConfig::new("https://api.example.com/cracks/").unwrap();
        assert_eq!(
            config.endpoint_url(Endpoint::ZipUpload),
            "https://api.example.com/cracks/zip_upload"
        );
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(ClientConfig::new("ftp://example.com").is_err());
        assert!(ClientConfig::new("not a url").is_err());
        assert!(ClientConfig::new("http://example.com/?x=1").is_err());
    }

    #[test]
    fn resolve_skips_invalid_candidates() {
        let config = ClientConfig::resolve([None, Some("::bad::"), Some("http://10.0.0.2:9000")]);
        assert_eq!(config.base_url(), "http://10.0.0.2:9000");
        assert_eq!(ClientConfig::resolve([None, None]), ClientConfig::default());
    }

    #[test]
    fn page_override_applies_to_that_resolution_only() {
        let build_time = Some("https://cracks.internal");
        let overridden = ClientConfig::resolve([Some("http://10.0.0.2:9000"), build_time]);
        assert_eq!(overridden.base_url(), "http://10.0.0.2:9000");

        let next_visit = ClientConfig::resolve([None, build_time]);
        assert_eq!(next_visit.base_url(), "https://cracks.internal");
    }

    #[test]
    fn preview_url_encodes_crack_type() {
        let config = ClientConfig::default();
        assert_eq!(
            config.report_preview_url("Horizontal Crack"),
            "http://localhost:8000/report-preview?crack_type=Horizontal%20Crack"
        );
    }
}
