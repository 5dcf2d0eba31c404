//! Platform abstraction layer
//!
//! Browser-only pieces:
//! - `storage`: LocalStorage-backed `KeyValueStore`
//! - `web`: `wasm_bindgen` facade driven by the JS front end
//!
//! Native builds use `persistence::FileStore` and have nothing here.

#[cfg(target_arch = "wasm32")]
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;
