pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TOOL_NAME: &str = "generate_rag_answer";
pub const DEFAULT_USER: &str = "user";
pub const TOOLS_CALL_PATH: &str = "/api/v2/mcp/tools/call";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub fn default_include_sources() -> bool {
    true
}

/// `cli-<user>`, the session id used when none is configured.
pub fn default_session_id(user: Option<String>) -> String {
    format!("cli-{}", user.unwrap_or_else(|| DEFAULT_USER.to_string()))
}
