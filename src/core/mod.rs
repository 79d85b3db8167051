pub mod codec;
pub mod encoder;
pub mod format;
pub mod index;
pub mod types;
