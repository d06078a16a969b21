pub mod generator;
pub mod random;

pub use generator::{InsightGenerator, GRAMMAR_TIPS};
