//! Generation pipeline: prompt rendering, model invocation, response parsing.

pub mod generator;
pub mod handlers;
pub mod prompts;
