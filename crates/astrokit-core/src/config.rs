use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPLATE: &str = "${token}.${extension}";
pub const DEFAULT_EXTENSION: &str = "xisf";

/// Settings for discovering channel files on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Template the discovered files must match.
    #[serde(default = "default_template")]
    pub template: String,
    /// Extension that does not need to be recorded per channel row.
    #[serde(default = "default_extension")]
    pub default_extension: String,
    /// Maximum directory depth below the template's static root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub follow_links: bool,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            default_extension: default_extension(),
            max_depth: None,
            follow_links: false,
        }
    }
}

impl ScanConfig {
    pub fn discover_options(&self) -> crate::discover::DiscoverOptions {
        crate::discover::DiscoverOptions {
            max_depth: self.max_depth,
            follow_links: self.follow_links,
        }
    }
}
