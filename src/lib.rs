// Reusable library API — visible to both CLI and WASM builds
pub mod candidates;
pub mod errors;
pub mod generator;
pub mod grid;
pub mod kana;
pub mod log;
pub mod puzzle;
pub mod vocab;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
