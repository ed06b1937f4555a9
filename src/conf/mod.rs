mod config;
mod dataset;
mod embedded;
mod networked;

pub use self::config::Config;
pub use dataset::DatasetConfig;
pub use embedded::EmbeddedConfig;
pub use networked::NetworkedConfig;
