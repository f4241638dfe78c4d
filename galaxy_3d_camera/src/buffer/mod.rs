//! Parameter blocks: named-field buffer layouts the camera uploads into.
//!
//! The camera only needs to resolve a variable name to a byte offset and
//! write raw bytes there. Any buffer implementation exposing that can be
//! an upload target; `ConstantBuffer` is the CPU-side implementation
//! provided here.

mod constant_buffer;

pub use constant_buffer::{ConstantBuffer, ConstantBufferDesc, FieldDesc, FieldType};

use crate::error::Result;

/// Named-field layout capability of a destination buffer.
pub trait ParameterBlock {
    /// Byte offset of a named variable, `None` if the layout has no such variable.
    fn variable_offset(&self, name: &str) -> Option<u64>;

    /// Total capacity in bytes.
    fn size(&self) -> u64;

    /// Write `data` starting at `offset`.
    fn set_blob(&mut self, offset: u64, data: &[u8]) -> Result<()>;
}
