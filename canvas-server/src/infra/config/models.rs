use std::path::{Path, PathBuf};

use canvas_core::CatalogSources;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub cors: CorsConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    pub fn catalog_sources(&self) -> CatalogSources {
        self.data.sources()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::in_dir(DEFAULT_DATA_DIR),
            cors: CorsConfig::default(),
            metadata: ConfigMetadata::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Where the catalog documents are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub paintings: PathBuf,
    pub artists: PathBuf,
    pub galleries: PathBuf,
}

impl DataConfig {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let CatalogSources {
            paintings,
            artists,
            galleries,
        } = CatalogSources::in_dir(dir);
        Self {
            dir: dir.to_path_buf(),
            paintings,
            artists,
            galleries,
        }
    }

    pub fn sources(&self) -> CatalogSources {
        CatalogSources {
            paintings: self.paintings.clone(),
            artists: self.artists.clone(),
            galleries: self.galleries.clone(),
        }
    }
}

/// Cross-origin policy. No origins means any origin, matching a stock
/// permissive CORS setup.
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty()
            || self
                .allowed_origins
                .iter()
                .any(|origin| origin.trim() == "*")
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
