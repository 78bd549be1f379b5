//! The editor pane's text buffer.
//!
//! Provides a rope-backed buffer with cursor management, designed for
//! integration into the TEA architecture. The buffer is the single source
//! of truth for document content.

mod buffer;

pub use buffer::{Cursor, Direction, EditorBuffer};

/// Failure modes for writing the buffer to disk.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The buffer has no file path (started without an argument).
    #[error("buffer has no file path")]
    NoPath,
    /// The file changed on disk since it was opened or last saved.
    #[error("file changed on disk since last save")]
    DiskConflict,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
