//! Domain model types (pure).
//!
//! Everything here is plain data built fresh for each parse; nothing is
//! shared across requests.

pub mod document;
pub mod error;
pub mod level;
pub mod section;

// Re-export for convenience
pub use document::ParsedDocument;
pub use error::{AppError, InputError, InternalFault};
pub use level::{LevelLabel, DEFAULT_LEVEL};
pub use section::Section;
