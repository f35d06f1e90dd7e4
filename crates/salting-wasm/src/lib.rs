//! WASM bindings for salting.
//!
//! Exposes token issue/verification and the password policy via
//! wasm-bindgen for consumption by TypeScript browser code.

pub mod auth;
mod error;
pub mod policy;
