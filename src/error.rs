//! Error types for wellness-tui
//!
//! The tracker core is made of total functions and cannot fail; the only
//! fallible boundary is the terminal event source, wrapped here in a
//! thiserror enum so callers keep the underlying io::Error as a source.

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("event poll: {0}")]
    Poll(#[source] std::io::Error),
    #[error("event read: {0}")]
    Read(#[source] std::io::Error),
}
