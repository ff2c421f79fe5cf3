//! MCP server for authoring Perchance-style generative templates.
//!
//! Exposes `validate_perchance_code` and `generate_random_output` tools, an
//! example template resource, and a list-authoring prompt over JSON-RPC 2.0
//! stdio transport.
//!
//! The template interpreter lives in [`template`] and has no protocol
//! dependencies.

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod template;

pub mod schema;
