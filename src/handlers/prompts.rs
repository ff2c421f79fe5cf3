use crate::protocol::{
    GetPromptParams, GetPromptResult, ListPromptsResult, McpErrorCode, McpErrorResponse,
    PromptArgument, PromptDescriptor, PromptMessage, ToolResultContent,
};

pub const CREATE_LIST: &str = "create_perchance_list";

/// Handle `prompts/list`.
pub async fn list() -> ListPromptsResult {
    ListPromptsResult {
        prompts: vec![PromptDescriptor {
            name: CREATE_LIST.to_string(),
            description: "Prompt to help create a Perchance list".to_string(),
            arguments: vec![PromptArgument {
                name: "topic".to_string(),
                description: "The topic for the new list".to_string(),
                required: true,
            }],
        }],
    }
}

/// Handle `prompts/get`.
///
/// `topic` is required; a missing topic is reported as invalid arguments.
pub async fn get(params: GetPromptParams) -> Result<GetPromptResult, McpErrorResponse> {
    if params.name != CREATE_LIST {
        return Err(McpErrorResponse::canonical(McpErrorCode::PromptNotFound));
    }

    let topic = params.arguments.get("topic").ok_or_else(|| {
        McpErrorResponse::new(
            McpErrorCode::InvalidArguments,
            "Missing required argument: topic",
        )
    })?;

    Ok(GetPromptResult {
        description: format!("Creating a Perchance list for {topic}"),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: ToolResultContent::text(format!(
                "Create a Perchance.org list for {topic}. Kindly include several lists, \
                 an HTML template using placeholders, and explain the structure."
            )),
        }],
    })
}
