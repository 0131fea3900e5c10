//! MCP envelope and tool-descriptor types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A declared capability: name, description, and JSON-schema input/output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
}

/// Abbreviated descriptor returned on the invoke path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSummary {
    pub name: String,
    pub description: String,
}

/// Incoming envelope on the invoke endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum McpEnvelope {
    McpListTools,
    McpCall {
        tool_name: String,
        #[serde(default)]
        arguments: Value,
    },
}

/// Outgoing reply on the invoke endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum McpReply {
    McpListTools { tools: Vec<ToolSummary> },
    McpCallResult { result: Value },
}

/// One-time capability announcement emitted on the discovery stream
#[derive(Debug, Clone, Serialize)]
pub struct ToolAnnouncement {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub tools: Vec<ToolDescriptor>,
}

impl ToolAnnouncement {
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self {
            kind: "mcp_list_tools",
            tools,
        }
    }
}

/// Arguments accepted by the `fetch_products` tool
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchProductsArgs {
    #[serde(default)]
    pub limit: Option<usize>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_envelope_parsing() {
        let json = r#"{
            "type": "mcp_call",
            "tool_name": "fetch_products",
            "arguments": {"limit": 3}
        }"#;

        let envelope: McpEnvelope = serde_json::from_str(json).unwrap();
        match envelope {
            McpEnvelope::McpCall {
                tool_name,
                arguments,
            } => {
                assert_eq!(tool_name, "fetch_products");
                assert_eq!(arguments["limit"], 3);
            }
            other => panic!("expected mcp_call, got {:?}", other),
        }
    }

    #[test]
    fn test_list_tools_envelope_parsing() {
        let envelope: McpEnvelope =
            serde_json::from_str(r#"{"type": "mcp_list_tools"}"#).unwrap();
        assert!(matches!(envelope, McpEnvelope::McpListTools));
    }

    #[test]
    fn test_unknown_envelope_type_rejected() {
        let result: Result<McpEnvelope, _> =
            serde_json::from_str(r#"{"type": "mcp_subscribe"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_call_arguments_default_to_null() {
        let envelope: McpEnvelope = serde_json::from_str(
            r#"{"type": "mcp_call", "tool_name": "fetch_products"}"#,
        )
        .unwrap();
        match envelope {
            McpEnvelope::McpCall { arguments, .. } => assert!(arguments.is_null()),
            other => panic!("expected mcp_call, got {:?}", other),
        }
    }

    #[test]
    fn test_reply_serialization_tags() {
        let reply = McpReply::McpCallResult {
            result: json!([{"nazwa": "Widget"}]),
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["type"], "mcp_call_result");

        let reply = McpReply::McpListTools { tools: vec![] };
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["type"], "mcp_list_tools");
    }

    #[test]
    fn test_negative_limit_rejected() {
        let result: Result<FetchProductsArgs, _> =
            serde_json::from_value(json!({"limit": -1}));
        assert!(result.is_err());
    }
}
