mod api;
mod defaults;
mod tool;

use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::ApiConfig;
pub use defaults::{
    default_include_sources, default_session_id, DEFAULT_API_URL, DEFAULT_TOOL_NAME,
    REQUEST_TIMEOUT_SECS, TOOLS_CALL_PATH,
};
pub use tool::ToolConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub verbose: Option<bool>,
}

/// Settings resolved once at startup and shared by reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub tool_name: String,
    pub session_id: String,
    pub include_sources: bool,
    pub verbose: bool,
}

/// Optional on-disk configuration, YAML or JSON.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tool: ToolConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            session_id: default_session_id(None),
            include_sources: default_include_sources(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn from_env_and_args(args: &Args, file_config: &FileConfig) -> Self {
        Self::resolve(args, file_config, |key| env::var(key).ok())
    }

    /// Precedence: CLI args > environment > config file > defaults.
    ///
    /// `lookup` stands in for the process environment. Empty values count as
    /// unset, except for `INCLUDE_SOURCES` where any value other than `true`
    /// (case-insensitive), empty included, means false.
    pub fn resolve<F>(args: &Args, file_config: &FileConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let api_base_url = args
            .api_url
            .clone()
            .or_else(|| var("RAG_API_URL"))
            .or_else(|| file_config.api.url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let tool_name = args
            .tool
            .clone()
            .or_else(|| var("TOOL_NAME"))
            .or_else(|| file_config.tool.name.clone())
            .unwrap_or_else(|| DEFAULT_TOOL_NAME.to_string());

        let session_id = var("SESSION_ID")
            .or_else(|| file_config.session.id.clone())
            .unwrap_or_else(|| default_session_id(var("USER").or_else(|| var("USERNAME"))));

        let include_sources = if args.no_sources {
            false
        } else {
            match lookup("INCLUDE_SOURCES") {
                Some(v) => v.to_lowercase() == "true",
                None => file_config
                    .tool
                    .include_sources
                    .unwrap_or_else(default_include_sources),
            }
        };

        let verbose = args.verbose
            || match var("RAG_CHAT_VERBOSE") {
                Some(v) => matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"),
                None => file_config.session.verbose.unwrap_or(false),
            };

        Config {
            api_base_url,
            tool_name,
            session_id,
            include_sources,
            verbose,
        }
    }

    /// Full URL of the tool-call endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.api_base_url, TOOLS_CALL_PATH)
    }
}

impl FileConfig {
    /// Load the first config file found, or the default when there is none.
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".rag-chat.yaml"),
            PathBuf::from(".rag-chat.yml"),
            PathBuf::from(".rag-chat.json"),
        ];

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("rag-chat");
            paths.push(config_dir.join("rag-chat.yaml"));
            paths.push(config_dir.join("rag-chat.yml"));
            paths.push(config_dir.join("rag-chat.json"));
        }

        paths
    }
}
