// ABOUTME: Selection module - strategies that map a free-text query to a tool.
// ABOUTME: Includes the keyword heuristic and a model-backed chooser.

mod anthropic;
mod keyword;
mod model;
mod strategy;

pub use anthropic::*;
pub use keyword::*;
pub use model::*;
pub use strategy::*;

#[cfg(test)]
mod keyword_test;
