//! aria-ui - Shared UI types and components for the Aria web interface
//!
//! Contains display types, stores, and pure view components. Views take
//! state plus event handlers and perform no I/O of their own; everything
//! network-shaped lives in the web crate.

pub mod components;
pub mod display_types;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
