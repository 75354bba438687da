//! Byte buffers shared by the bcs-codec encoder and decoder.
//!
//! [`Writer`] is an append-only, auto-growing output buffer with support for
//! rewriting an already-written region in place. [`Reader`] is a cursor over a
//! borrowed byte slice whose reads never run past the end of the input.

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Errors raised by bounds-checked buffer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("end of buffer")]
    EndOfBuffer,
    #[error("invalid UTF-8")]
    InvalidUtf8,
}
