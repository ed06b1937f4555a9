use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EmbeddedConfig {
    #[serde(default = "EmbeddedConfig::default_path")]
    pub path: PathBuf,
    /// Name of the redb table holding the dataset.
    #[serde(default = "EmbeddedConfig::default_bucket")]
    pub bucket: String,
}

impl EmbeddedConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("./kvbench.redb")
    }

    fn default_bucket() -> String {
        String::from("world")
    }
}

impl Default for EmbeddedConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            bucket: Self::default_bucket(),
        }
    }
}
