use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub include_sources: Option<bool>,
}
