//! Block extensions shipped with the engine.

pub mod front_matter;

pub use front_matter::{FenceConfig, FrontMatterExtension, FrontMatterRecognizer};
