use once_cell::sync::Lazy;
use std::{fs, path::PathBuf};
use thiserror::Error;

use super::{
    models::{
        Config, ConfigMetadata, CorsConfig, DEFAULT_DATA_DIR, DEFAULT_HOST,
        DEFAULT_PORT, DataConfig, ServerConfig,
    },
    sources::{EnvConfig, FileConfig},
    validation::{self, ConfigGuardRailError, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("canvas.toml"),
        PathBuf::from("config/canvas.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

/// Builds a [`Config`] from `.env`, an optional TOML file and the process
/// environment. Environment values win over the file; the caller applies
/// command-line overrides on top.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let env_config = EnvConfig::gather();
        let (file_config, config_path) = self.load_file_config(&env_config)?;

        let (config, warnings) = compose_config(
            file_config,
            env_config,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // Explicit and env-provided paths must exist; defaults are probed.
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env_config.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(path) => path.clone(),
                None => return Ok((None, None)),
            },
        };

        read_file_config(path).map(|(config, path)| (Some(config), Some(path)))
    }
}

pub(crate) fn read_file_config(
    path: PathBuf,
) -> Result<(FileConfig, PathBuf), ConfigLoadError> {
    let contents =
        fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
            path: path.clone(),
            source: err,
        })?;
    let file_config: FileConfig =
        toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
            path: path.clone(),
            source: err,
        })?;
    Ok((file_config, path))
}

/// Merge file and environment values over the defaults.
pub(crate) fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if metadata.config_path.is_none() {
        warnings.push_with_hint(
            "No canvas.toml detected; using environment variables and defaults",
            "Create canvas.toml or pass --config to pin settings in a file",
        );
    }

    let FileConfig {
        server: file_server,
        data: file_data,
        cors: file_cors,
    } = file_config.unwrap_or_default();

    let env_port = match env.server_port.as_deref() {
        Some(raw) => match raw.parse::<u16>() {
            Ok(port) => Some(port),
            Err(_) => {
                warnings.push(format!(
                    "PORT value '{raw}' is not a valid port number; ignoring it"
                ));
                None
            }
        },
        None => None,
    };

    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: env_port.or(file_server.port).unwrap_or(DEFAULT_PORT),
    };

    let data_dir = env
        .data_dir
        .or(file_data.dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    let defaults = DataConfig::in_dir(&data_dir);
    let data = DataConfig {
        paintings: env
            .paintings_path
            .or(file_data.paintings)
            .unwrap_or(defaults.paintings),
        artists: env
            .artists_path
            .or(file_data.artists)
            .unwrap_or(defaults.artists),
        galleries: env
            .galleries_path
            .or(file_data.galleries)
            .unwrap_or(defaults.galleries),
        dir: data_dir,
    };

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file_cors.allowed_origins)
            .unwrap_or_default(),
    };

    let config = Config {
        server,
        data,
        cors,
        metadata,
    };

    let guard_rail_warnings = validation::apply_guard_rails(&config)?;
    warnings.items.extend(guard_rail_warnings.items);

    Ok((config, warnings))
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::sources::{FileDataConfig, FileServerConfig};
    use std::path::Path;
    use tempfile::TempDir;

    fn metadata_with_file() -> ConfigMetadata {
        ConfigMetadata {
            config_path: Some(PathBuf::from("canvas.toml")),
            env_file_loaded: false,
        }
    }

    #[test]
    fn defaults_apply_without_any_source() {
        let (config, warnings) =
            compose_config(None, EnvConfig::default(), ConfigMetadata::default())
                .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert_eq!(
            config.data.paintings,
            Path::new("data").join("paintings-nested.json")
        );
        assert!(config.cors.is_permissive());
        assert!(
            warnings
                .items
                .iter()
                .any(|w| w.message.contains("No canvas.toml"))
        );
    }

    #[test]
    fn environment_overrides_file_values() {
        let file = FileConfig {
            server: FileServerConfig {
                host: Some("127.0.0.1".into()),
                port: Some(8080),
            },
            data: FileDataConfig {
                dir: Some(PathBuf::from("/srv/catalog")),
                artists: Some(PathBuf::from("/srv/people.json")),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = EnvConfig {
            server_port: Some("4000".into()),
            galleries_path: Some(PathBuf::from("/tmp/galleries.json")),
            ..Default::default()
        };

        let (config, _) =
            compose_config(Some(file), env, metadata_with_file()).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(
            config.data.paintings,
            PathBuf::from("/srv/catalog/paintings-nested.json")
        );
        assert_eq!(config.data.artists, PathBuf::from("/srv/people.json"));
        assert_eq!(config.data.galleries, PathBuf::from("/tmp/galleries.json"));
    }

    #[test]
    fn unusable_port_falls_back_with_a_warning() {
        let env = EnvConfig {
            server_port: Some("eighty".into()),
            ..Default::default()
        };

        let (config, warnings) =
            compose_config(None, env, metadata_with_file()).unwrap();

        assert_eq!(config.server.port, 3000);
        assert!(warnings.items.iter().any(|w| w.message.contains("eighty")));
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");

        let err = ConfigLoader::new()
            .with_config_path(&missing)
            .with_env_file(dir.path().join(".env"))
            .load()
            .unwrap_err();

        assert!(matches!(err, ConfigLoadError::MissingConfig { path } if path == missing));
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("canvas.toml");
        fs::write(&path, "[server\nport = 1").unwrap();

        let err = read_file_config(path.clone()).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse { .. }));
    }

    #[test]
    fn file_values_are_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("canvas.toml");
        fs::write(
            &path,
            "[server]\nport = 9000\n\n[cors]\nallowed_origins = [\"https://museum.example\"]\n",
        )
        .unwrap();

        let (file, resolved) = read_file_config(path.clone()).unwrap();
        assert_eq!(resolved, path);

        let (config, _) =
            compose_config(Some(file), EnvConfig::default(), metadata_with_file())
                .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.cors.allowed_origins, vec!["https://museum.example"]);
        assert!(!config.cors.is_permissive());
    }
}
