use crate::protocol::{
    ListResourcesResult, McpErrorCode, McpErrorResponse, ReadResourceParams, ReadResourceResult,
    ResourceContents, ResourceDescriptor,
};

pub const BASIC_EXAMPLE_URI: &str = "perchance://examples/basic";

const BASIC_EXAMPLE: &str = "<p>A [creature] that is [size] and loves [food]< /p>

creature
dog|cat|bird

size
small|large|medium

food
pizza|burgers|salad";

struct StaticResource {
    uri: &'static str,
    name: &'static str,
    description: &'static str,
    text: &'static str,
}

const RESOURCES: &[StaticResource] = &[StaticResource {
    uri: BASIC_EXAMPLE_URI,
    name: "basic",
    description: "Basic Perchance example with lists and HTML",
    text: BASIC_EXAMPLE,
}];

const MIME_TYPE: &str = "text/plain";

/// Handle `resources/list`.
pub async fn list() -> ListResourcesResult {
    ListResourcesResult {
        resources: RESOURCES
            .iter()
            .map(|r| ResourceDescriptor {
                uri: r.uri.to_string(),
                name: r.name.to_string(),
                mime_type: MIME_TYPE.to_string(),
                description: r.description.to_string(),
            })
            .collect(),
    }
}

/// Handle `resources/read`.
pub async fn read(params: ReadResourceParams) -> Result<ReadResourceResult, McpErrorResponse> {
    let resource = RESOURCES
        .iter()
        .find(|r| r.uri == params.uri)
        .ok_or_else(|| McpErrorResponse::canonical(McpErrorCode::ResourceNotFound))?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContents {
            uri: resource.uri.to_string(),
            mime_type: MIME_TYPE.to_string(),
            text: resource.text.to_string(),
        }],
    })
}
