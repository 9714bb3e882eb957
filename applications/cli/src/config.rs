/// CLI configuration
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

const CONFIG_FILE: &str = "taskdeck.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

impl CliConfig {
    /// Load configuration from file and the process environment
    pub fn load(config_path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_from(config_path, &std::env::vars().collect())
    }

    /// Load configuration from file and the given environment.
    ///
    /// Precedence, lowest first: defaults, config file, `API_BASE_URL`,
    /// `TASKDECK_*` variables.
    pub fn load_from(
        config_path: Option<&Path>,
        env: &HashMap<String, String>,
    ) -> Result<Self, config::ConfigError> {
        let mut settings = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default(
                "store_path",
                home_store_path(env).to_string_lossy().into_owned(),
            )?;

        // An explicit path must exist; the default one is optional
        settings = match config_path {
            Some(path) => settings.add_source(config::File::from(path).required(true)),
            None => settings.add_source(config::File::from(Path::new(CONFIG_FILE)).required(false)),
        };

        // Variable used by earlier deployments of the web client
        let legacy: config::Map<String, String> = env
            .get("API_BASE_URL")
            .map(|url| ("api_base_url".to_string(), url.clone()))
            .into_iter()
            .collect();
        settings = settings.add_source(config::Environment::default().source(Some(legacy)));

        settings = settings.add_source(
            config::Environment::with_prefix("TASKDECK")
                .prefix_separator("_")
                .source(Some(env.clone().into_iter().collect())),
        );

        settings.build()?.try_deserialize()
    }
}

fn home_store_path(env: &HashMap<String, String>) -> PathBuf {
    env.get("HOME")
        .filter(|home| !home.is_empty())
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
        .join(".taskdeck")
        .join("session.json")
}

// Default values
fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_store_path() -> PathBuf {
    home_store_path(&std::env::vars().collect())
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            store_path: default_store_path(),
        }
    }
}
