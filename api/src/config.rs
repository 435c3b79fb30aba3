use std::{
    env, io,
    path::{Path, PathBuf},
};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL_PATH: &str = "model.json";

/// Immutable settings of the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    host: String,
    port: u16,
    model_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT, DEFAULT_MODEL_PATH)
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16, model_path: impl Into<PathBuf>) -> Self {
        Self {
            host: host.into(),
            port,
            model_path: model_path.into(),
        }
    }

    /// Reads `HOST`, `PORT` and `MODEL_PATH` from the environment.
    ///
    /// # Errors
    /// Returns an `InvalidInput` io error if `PORT` isn't a valid port number.
    pub fn from_env() -> io::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reading through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> io::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidInput, format!("invalid PORT '{port}': {e}"))
            })?,
            None => DEFAULT_PORT,
        };

        let model_path = lookup("MODEL_PATH").unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

        Ok(Self::new(host, port, model_path))
    }

    /// The socket address to bind to.
    pub fn addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}
