//! # Default Grammar
//!
//! The block grammar every line falls back to when no registered recognizer
//! claims it.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (blockquote depth, fence signature,
//!    blank status)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps the container
//!    stack and emits `BlockNode`s as leaves open and close
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: nothing else is recognized inside them
//! - Every block node stores byte spans into the rope and 1-based line numbers

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode, ContainerFrame};
