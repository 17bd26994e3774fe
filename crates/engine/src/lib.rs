//! `deepauth-engine`
//!
//! **Responsibility:** the (simulated) analysis engine.
//!
//! Nothing in here is a real detector:
//! - Scores are uniform draws from ranges picked by a coin flip (images) or by
//!   three shallow text heuristics.
//! - Explanations are shuffled picks from fixed catalogs.
//! - An artificial delay stands in for processing time.
//!
//! Randomness is injected (`AnalysisEngine::seeded`) so every draw can be
//! reproduced in tests.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod heatmap;
pub mod heuristics;
pub mod probe;
mod sampling;

pub use config::{DelayWindow, EngineConfig};
pub use engine::AnalysisEngine;
pub use error::EngineError;
pub use heatmap::generate_heatmap;
pub use heuristics::{TextSignals, character_count, word_count};
pub use probe::{DimensionProbe, FixedProbe, HeaderProbe, ImageDimensions};
