//! Core domain models.
//!
//! Chunks, personas and the content filter. These are pure values with no
//! I/O dependencies.

pub mod chunk;
pub mod persona;
pub mod safety;

pub use chunk::Chunk;
pub use persona::{DEFAULT_RESERVED_USERNAME, Persona};
pub use safety::{ContentFilter, DEFAULT_BANNED_WORDS};
