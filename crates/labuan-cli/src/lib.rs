//! CLI library components for the Labuan form transformer.

pub mod logging;
pub mod output;
pub mod pipeline;
pub mod summary;
pub mod types;
