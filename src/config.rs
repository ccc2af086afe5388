use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub upload_dir: PathBuf,
    pub bind: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    /// Fixed shuffle seed; `None` draws fresh entropy per render.
    pub seed: Option<u64>,
}

impl Config {
    #[must_use]
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            bind: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            seed: None,
        }
    }

    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Creates the storage directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Propagates the I/O error from `create_dir_all`.
    pub fn ensure_upload_dir(&self) -> std::io::Result<()> {
        if !self.upload_dir.is_dir() {
            log::info!("Creating upload directory {}", self.upload_dir.display());
            std::fs::create_dir_all(&self.upload_dir)?;
        }
        Ok(())
    }
}
