use serde_json::{json, Value};

use crate::protocol::{CodeParams, ToolResult};
use crate::template::RandomSource;

pub const NAME: &str = "generate_random_output";

/// Label prepended to every rendered template.
pub const OUTPUT_LABEL: &str = "Random output: ";

pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "code": {
                "type": "string",
                "description": "Perchance code containing HTML and lists"
            }
        },
        "required": ["code"]
    })
}

pub fn definition() -> Value {
    json!({
        "name": NAME,
        "description": "Generate a random output from Perchance code",
        "inputSchema": input_schema()
    })
}

/// Handle a `generate_random_output` tool call.
pub async fn handle(params: CodeParams, rng: &mut RandomSource) -> ToolResult {
    let rendered = rng.generate(&params.code);
    ToolResult::text(format!("{OUTPUT_LABEL}{rendered}"))
}
