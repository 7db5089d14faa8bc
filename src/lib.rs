//! Page interaction controller for the StyleDNA landing page.
//!
//! The behavior lives in plain Rust modules that run and test on any target.
//! The `dom` module, built only for `wasm32`, binds them to the browser and
//! exports the start function the page's loader calls.

pub mod analytics;
pub mod animation;
pub mod config;
pub mod consent;
pub mod effects;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod utils;
pub mod waitlist;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use error::{Error, Result};
