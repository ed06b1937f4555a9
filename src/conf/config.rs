use std::path::Path;

use config::{Config as CConfig, Map};
use serde::{Deserialize, Serialize};

use crate::{
    conf::{DatasetConfig, EmbeddedConfig, NetworkedConfig},
    core::BenchError,
};

const ENV_PREFIX: &str = "KVBENCH";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub embedded: EmbeddedConfig,
    #[serde(default)]
    pub networked: NetworkedConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, BenchError> {
        let config = CConfig::builder()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Config>()?;
        Ok(config)
    }

    /// Load the optional TOML file, then apply `KVBENCH_<SECTION>__<FIELD>` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Config, BenchError> {
        Self::load_with_env(path, None)
    }

    /// Like [`Config::load`], reading overrides from `env` instead of the process environment when given.
    fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Config, BenchError> {
        let mut builder = CConfig::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path.to_path_buf()).format(config::FileFormat::Toml),
            );
        }
        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize::<Config>()?;
        Ok(config)
    }
}
