use serde::Serialize;

/// Body of `POST /api/v2/mcp/tools/call`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ToolCallRequest {
    pub tool_name: String,
    pub arguments: ToolArguments,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ToolArguments {
    pub query: String,
    pub include_sources: bool,
}

impl ToolCallRequest {
    pub fn new(
        tool_name: impl Into<String>,
        query: impl Into<String>,
        include_sources: bool,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: ToolArguments {
                query: query.into(),
                include_sources,
            },
            session_id: session_id.into(),
        }
    }
}
