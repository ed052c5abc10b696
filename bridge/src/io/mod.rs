//! # IO Module
//!
//! The boundary between the SDK and the plugin host.
//!
//! SDK objects come in as [`crate::sdk`] models, are translated by the
//! [`api::mappers`], and leave as `shared` API values encoded by
//! [`api::codec::ApiCodec`].

pub mod api;

pub use api::*;
