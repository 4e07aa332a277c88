//! CLI library components for the DRE category verifier.

pub mod logging;
pub mod pipeline;
