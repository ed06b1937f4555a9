use std::path::PathBuf;

use clap::Parser;
use log::kv::{ToValue, Value};

use crate::backend::BackendKind;
use crate::bench::Mode;
use crate::conf::Config;

#[derive(Parser, Debug, PartialEq)]
#[command(version, about = "Write/read throughput of an embedded store and a networked cache")]
pub struct CliArgs {
    #[arg(value_enum)]
    pub backend: BackendKind,
    #[arg(value_enum)]
    pub mode: Mode,
    #[arg(short, long)]
    pub config: Option<String>,
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
    #[arg(long)]
    pub key_prefix: Option<String>,
    #[arg(long)]
    pub value_prefix: Option<String>,
    #[arg(long)]
    pub path: Option<PathBuf>,
    #[arg(long)]
    pub url: Option<String>,
}

impl CliArgs {
    /// Overlay command line flags on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(count) = self.count {
            config.dataset.count = count;
        }
        if let Some(prefix) = &self.key_prefix {
            config.dataset.key_prefix = prefix.clone();
        }
        if let Some(prefix) = &self.value_prefix {
            config.dataset.value_prefix = prefix.clone();
        }
        if let Some(path) = &self.path {
            config.embedded.path = path.clone();
        }
        if let Some(url) = &self.url {
            config.networked.url = url.clone();
        }
    }
}

impl ToValue for CliArgs {
    fn to_value(&self) -> Value<'_> {
        Value::from_debug(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = CliArgs::parse_from(["self", "embedded", "write-read", "--config", "foo"]);
        assert_eq!(
            args,
            CliArgs {
                backend: BackendKind::Embedded,
                mode: Mode::WriteRead,
                config: Some("foo".to_string()),
                count: None,
                key_prefix: None,
                value_prefix: None,
                path: None,
                url: None,
            }
        );
    }

    #[test]
    fn test_short_aliases() {
        let args = CliArgs::parse_from(["self", "redis", "rw"]);
        assert_eq!(args.backend, BackendKind::Networked);
        assert_eq!(args.mode, Mode::WriteRead);

        let args = CliArgs::parse_from(["self", "bolt", "r"]);
        assert_eq!(args.backend, BackendKind::Embedded);
        assert_eq!(args.mode, Mode::Read);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(CliArgs::try_parse_from(["self", "memcached", "w"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let args = CliArgs::parse_from([
            "self",
            "networked",
            "w",
            "-n",
            "3",
            "--key-prefix",
            "k",
            "--url",
            "redis://cache:6380",
        ]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.dataset.count, 3);
        assert_eq!(config.dataset.key_prefix, "k");
        assert_eq!(config.dataset.value_prefix, "world");
        assert_eq!(config.networked.url, "redis://cache:6380");
    }
}
