use serde_json::{json, Value};

use crate::protocol::{CodeParams, ToolResult};
use crate::template;

pub const NAME: &str = "validate_perchance_code";

/// Input schema advertised in `tools/list` and enforced before dispatch.
pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "code": { "type": "string", "description": "Perchance code to validate" }
        },
        "required": ["code"]
    })
}

pub fn definition() -> Value {
    json!({
        "name": NAME,
        "description": "Validate the syntax of Perchance code",
        "inputSchema": input_schema()
    })
}

/// Handle a `validate_perchance_code` tool call.
///
/// A negative verdict is still a successful call; only the message differs.
pub async fn handle(params: CodeParams) -> ToolResult {
    let report = template::validate(&params.code);
    tracing::debug!(valid = report.valid, "validated template");
    ToolResult::text(report.message)
}
