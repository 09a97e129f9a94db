pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict";

/// Name of the variable that overrides [`DEFAULT_ENDPOINT`] at build time.
pub const ENDPOINT_ENV: &str = "KISAN_MODEL_URL";

/// 5 MiB
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Multipart part name the inference service reads the image from.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub max_upload_bytes: u64,
    pub upload_field: &'static str,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            upload_field: UPLOAD_FIELD,
        }
    }
}

impl ClientConfig {
    /// Builds the configuration from an optional endpoint override, usually
    /// `option_env!("KISAN_MODEL_URL")`. Blank overrides are ignored.
    pub fn from_override(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => {
                log::debug!("Using inference endpoint override: {}", url);
                Self {
                    endpoint: url.to_string(),
                    ..Self::default()
                }
            }
            None => Self::default(),
        }
    }
}
