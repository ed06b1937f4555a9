use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NetworkedConfig {
    #[serde(default = "NetworkedConfig::default_url")]
    pub url: String,
}

impl NetworkedConfig {
    fn default_url() -> String {
        String::from("redis://localhost:6379")
    }
}

impl Default for NetworkedConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
        }
    }
}
