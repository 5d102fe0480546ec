//! Trait seams between the engine's stages.

mod resolver;
mod timed_value;

pub use resolver::ContinentResolver;
pub use timed_value::TimedValue;
