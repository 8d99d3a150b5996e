use std::path::PathBuf;

/// Runtime configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the two persisted blobs.
    pub data_dir: PathBuf,
    /// Prefix used when displaying short URLs.
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let data_dir =
            std::env::var("LINKLET_DATA_DIR").unwrap_or_else(|_| "./linklet-data".to_string());

        let base_url = std::env::var("LINKLET_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Config {
            data_dir: PathBuf::from(data_dir),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Path of the link store blob.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("links.json")
    }

    /// Path of the action log blob.
    pub fn journal_path(&self) -> PathBuf {
        self.data_dir.join("journal.json")
    }
}
