//! # SDK Models
//!
//! Rust representations of the objects produced by the Stripe Terminal SDK.
//!
//! These are the source side of every translation in [`crate::io::api::mappers`].
//! They mirror the vendor's shapes closely, including fields the plugin API
//! never exposes, so that the mappers decide what is projected and what is
//! dropped. All of them deserialize from the SDK's JSON form.

pub mod models;

#[cfg(test)]
pub(crate) mod test_utils;

pub use models::*;
