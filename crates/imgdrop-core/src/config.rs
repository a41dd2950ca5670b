//! Cloudinary upload configuration.
//!
//! The placeholders ship in the binary; deployers override them at runtime
//! through the desktop app's flags or environment.

use std::time::Duration;

/// Cloud name shipped in the binary until a deployer supplies a real one.
pub const PLACEHOLDER_CLOUD_NAME: &str = "YOUR_CLOUD_NAME";

/// Upload preset shipped in the binary until a deployer supplies a real one.
pub const PLACEHOLDER_UPLOAD_PRESET: &str = "YOUR_UPLOAD_PRESET";

/// Cloudinary REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Default request timeout for an upload.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Where and how to send unsigned uploads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloudinaryConfig {
    /// Account cloud name, part of the URL path
    pub cloud_name: String,
    /// Unsigned upload preset, sent as the `upload_preset` form field
    pub upload_preset: String,
    /// API root, without trailing slash
    pub api_base: String,
    /// Whole-request timeout (None disables it)
    pub timeout: Option<Duration>,
}

impl Default for CloudinaryConfig {
    fn default() -> Self {
        Self::new(PLACEHOLDER_CLOUD_NAME, PLACEHOLDER_UPLOAD_PRESET)
    }
}

impl CloudinaryConfig {
    pub fn new(cloud_name: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Point uploads at a different API root (proxies, local stand-ins).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full image upload endpoint, e.g.
    /// `https://api.cloudinary.com/v1_1/demo/image/upload`.
    pub fn upload_url(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.api_base.trim_end_matches('/'),
            self.cloud_name
        )
    }

    /// True while either value is still the shipped placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.cloud_name == PLACEHOLDER_CLOUD_NAME || self.upload_preset == PLACEHOLDER_UPLOAD_PRESET
    }
}
