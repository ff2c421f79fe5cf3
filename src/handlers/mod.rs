pub mod generate_output;
pub mod prompts;
pub mod resources;
pub mod validate_code;

use serde::de::DeserializeOwned;

use crate::protocol::{
    CodeParams, GetPromptParams, InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    McpErrorCode, McpErrorResponse, ReadResourceParams, ToolCallParams, ToolResult,
};
use crate::schema;
use crate::template::RandomSource;

pub const SERVER_NAME: &str = "perchance-helper";
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, rng: &mut RandomSource) -> Option<JsonRpcResponse> {
    tracing::debug!(method = %req.method, "dispatching request");

    match req.method.as_str() {
        "initialize" => {
            if let Some(params) = req
                .params
                .as_ref()
                .and_then(|v| serde_json::from_value::<InitializeParams>(v.clone()).ok())
            {
                let client = params.client_info.as_ref();
                tracing::info!(
                    client = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
                    client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
                    protocol_version = params.protocol_version.as_deref().unwrap_or("unspecified"),
                    "client initializing"
                );
            }

            let result = serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {},
                    "resources": {},
                    "prompts": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => {
            let result = serde_json::json!({
                "tools": [
                    validate_code::definition(),
                    generate_output::definition()
                ]
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "tools/call" => {
            let params: ToolCallParams = match parse_params(req) {
                Ok(p) => p,
                Err(resp) => return Some(resp),
            };

            let tool_result = dispatch_tool_call(&params, rng).await;
            Some(JsonRpcResponse::from_result(req.id.clone(), &tool_result))
        }

        "resources/list" => {
            let result = resources::list().await;
            Some(JsonRpcResponse::from_result(req.id.clone(), &result))
        }

        "resources/read" => {
            let params: ReadResourceParams = match parse_params(req) {
                Ok(p) => p,
                Err(resp) => return Some(resp),
            };

            Some(match resources::read(params).await {
                Ok(result) => JsonRpcResponse::from_result(req.id.clone(), &result),
                Err(mcp_err) => JsonRpcResponse::error(req.id.clone(), mcp_err.into()),
            })
        }

        "prompts/list" => {
            let result = prompts::list().await;
            Some(JsonRpcResponse::from_result(req.id.clone(), &result))
        }

        "prompts/get" => {
            let params: GetPromptParams = match parse_params(req) {
                Ok(p) => p,
                Err(resp) => return Some(resp),
            };

            Some(match prompts::get(params).await {
                Ok(result) => JsonRpcResponse::from_result(req.id.clone(), &result),
                Err(mcp_err) => JsonRpcResponse::error(req.id.clone(), mcp_err.into()),
            })
        }

        _ if req.id.is_none() => None,

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

/// Deserialize `req.params`, or build the `-32602` response explaining why not.
fn parse_params<T: DeserializeOwned>(req: &JsonRpcRequest) -> Result<T, JsonRpcResponse> {
    match &req.params {
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
            JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_params(format!("Invalid {} params: {e}", req.method)),
            )
        }),
        None => Err(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::invalid_params(format!("Missing params for {}", req.method)),
        )),
    }
}

async fn dispatch_tool_call(params: &ToolCallParams, rng: &mut RandomSource) -> ToolResult {
    let schema = match params.name.as_str() {
        validate_code::NAME => validate_code::input_schema(),
        generate_output::NAME => generate_output::input_schema(),
        _ => {
            return McpErrorResponse::new(
                McpErrorCode::UnknownTool,
                format!("Unknown tool: {}", params.name),
            )
            .into();
        }
    };

    let code_params = match tool_arguments(params, &schema) {
        Ok(p) => p,
        Err(mcp_err) => return mcp_err.into(),
    };

    match params.name.as_str() {
        validate_code::NAME => validate_code::handle(code_params).await,
        generate_output::NAME => generate_output::handle(code_params, rng).await,
        _ => McpErrorResponse::canonical(McpErrorCode::UnknownTool).into(),
    }
}

/// Check tool arguments against the advertised schema, then deserialize them.
fn tool_arguments(
    params: &ToolCallParams,
    schema: &serde_json::Value,
) -> Result<CodeParams, McpErrorResponse> {
    let args = params.arguments.as_ref().ok_or_else(|| {
        McpErrorResponse::new(
            McpErrorCode::InvalidArguments,
            format!("Missing arguments for {}", params.name),
        )
    })?;

    schema::validate_value(schema, args).map_err(|e| {
        tracing::warn!(tool = %params.name, error = %e, "tool arguments rejected");
        McpErrorResponse::new(
            McpErrorCode::InvalidArguments,
            format!("Invalid arguments for {}: {e}", params.name),
        )
    })?;

    serde_json::from_value(args.clone()).map_err(|e| {
        McpErrorResponse::new(
            McpErrorCode::InvalidArguments,
            format!("Invalid arguments for {}: {e}", params.name),
        )
    })
}
