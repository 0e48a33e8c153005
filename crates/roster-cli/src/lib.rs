//! CLI library components for the roster normalizer.

pub mod logging;
pub mod pipeline;
