// src/lib.rs

pub mod core;

pub use crate::core::encoder::NumberEncoder;
pub use crate::core::index::WordIndex;
pub use crate::core::types::CodecError;
