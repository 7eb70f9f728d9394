//! WASM bindings for passtable
//!
//! This module exposes table generation and lookup to JavaScript workers.

#[cfg(feature = "wasm")]
pub mod bindings;

#[cfg(feature = "wasm")]
pub mod utils;

#[cfg(feature = "wasm")]
pub use bindings::WasmTable;
