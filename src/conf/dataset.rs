use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    #[serde(default = "DatasetConfig::default_count")]
    pub count: usize,
    #[serde(default = "DatasetConfig::default_key_prefix")]
    pub key_prefix: String,
    #[serde(default = "DatasetConfig::default_value_prefix")]
    pub value_prefix: String,
}

impl DatasetConfig {
    fn default_count() -> usize {
        2000
    }

    fn default_key_prefix() -> String {
        String::from("hello")
    }

    fn default_value_prefix() -> String {
        String::from("world")
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            count: Self::default_count(),
            key_prefix: Self::default_key_prefix(),
            value_prefix: Self::default_value_prefix(),
        }
    }
}
