use std::fs;
use std::path::PathBuf;

use perchance_mcp_server::handlers;
use perchance_mcp_server::protocol::{JsonRpcRequest, RpcId};
use perchance_mcp_server::template::{self, RandomSource};
use serde_json::Value;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden/fixtures")
        .join(name);
    fs::read_to_string(path).expect("fixture missing")
}

fn read_expected(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden/expected")
        .join(name);
    let text = fs::read_to_string(path).expect("expected file missing");
    serde_json::from_str(&text).expect("expected file is not JSON")
}

async fn call(method: &str) -> Value {
    let req = JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: Some(RpcId::Str("golden".into())),
        method: method.into(),
        params: None,
    };
    let mut rng = RandomSource::from_seed(Some(0));
    handlers::dispatch(&req, &mut rng)
        .await
        .expect("request must get a response")
        .result
        .expect("request must succeed")
}

#[test]
fn golden_fixture_parse() {
    let parsed = template::parse_lists(&fixture("tavern.txt"));
    let actual = serde_json::to_value(&parsed).unwrap();
    assert_eq!(actual, read_expected("tavern_lists.json"), "parse does not match golden");
}

#[test]
fn golden_fixture_render_shape() {
    let source = fixture("tavern.txt");
    let parsed = template::parse_lists(&source);
    let mut rng = RandomSource::from_seed(Some(2024));

    for _ in 0..25 {
        let out = rng.generate(&source);
        let rest = out.strip_prefix("<p>The ").unwrap();
        let (adjective, rest) = rest.split_once(' ').unwrap();
        assert!(parsed.list("adjective").unwrap().options.iter().any(|o| o == adjective));
        assert!(
            rest.ends_with(&format!(" to a {adjective} crowd.</p>")),
            "both [adjective] placeholders must agree: {out}"
        );
        assert!(!out.contains('['), "unresolved placeholder: {out}");
    }
}

#[tokio::test]
async fn golden_tools_list() {
    assert_eq!(call("tools/list").await, read_expected("tools_list.json"));
}

#[tokio::test]
async fn golden_resources_list() {
    assert_eq!(call("resources/list").await, read_expected("resources_list.json"));
}
