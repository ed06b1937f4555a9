//! Redis backend: `SET`/`GET` per key over one persistent connection.

use log::info;
use redis::{Commands, Connection};

use crate::conf::NetworkedConfig;
use crate::core::BenchError;

use super::Backend;

pub struct NetworkedBackend {
    conn: Connection,
}

impl NetworkedBackend {
    pub const NAME: &'static str = "networked";

    /// Connect to the server at `config.url`. No timeout is applied.
    pub fn open(config: &NetworkedConfig) -> Result<Self, BenchError> {
        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| BenchError::open(Self::NAME, format!("{}: {}", config.url, e)))?;
        info!("connecting to redis at {}", client.get_connection_info().addr);
        let conn = client
            .get_connection()
            .map_err(|e| BenchError::open(Self::NAME, format!("{}: {}", config.url, e)))?;
        Ok(Self { conn })
    }
}

impl Backend for NetworkedBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), BenchError> {
        self.conn
            .set::<_, _, ()>(key, value)
            .map_err(|e| BenchError::write(key, e))
    }

    fn read(&mut self, key: &str) -> Result<Option<String>, BenchError> {
        // A nil reply deserializes to None.
        self.conn
            .get::<_, Option<String>>(key)
            .map_err(|e| BenchError::read(key, e))
    }

    fn close(mut self: Box<Self>) -> Result<(), BenchError> {
        redis::cmd("QUIT")
            .query::<()>(&mut self.conn)
            .map_err(|e| BenchError::close(Self::NAME, e))
    }
}
