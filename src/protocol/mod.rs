pub mod request;
pub mod response;

pub use request::{
    ClientInfo, CodeParams, GetPromptParams, InitializeParams, JsonRpcRequest, ReadResourceParams,
    RpcId, ToolCallParams,
};
pub use response::{
    GetPromptResult, JsonRpcError, JsonRpcResponse, ListPromptsResult, ListResourcesResult,
    McpError, McpErrorCode, McpErrorResponse, PromptArgument, PromptDescriptor, PromptMessage,
    ReadResourceResult, ResourceContents, ResourceDescriptor, ToolResult, ToolResultContent,
};
