//! Interpreter for Perchance-style templates.
//!
//! A source mixes HTML with list definitions:
//!
//! ```text
//! <p>A [creature] is here</p>
//!
//! creature
//! dog|cat|bird
//! ```
//!
//! The first line is the body. `[creature]` is replaced by one option drawn
//! from the `creature` list.

pub mod parse;
pub mod render;
pub mod validate;

pub use parse::{parse_lists, OptionList, ParsedTemplate};
pub use render::{generate, generate_with, RandomSource};
pub use validate::{validate, Report};
