//! # Plugin API Layer
//!
//! - **mappers**: pure SDK-to-API translations, one mapper per entity
//! - **codec**: JSON encoding of API values for the plugin channel

pub mod codec;
pub mod mappers;

pub use codec::ApiCodec;
pub use mappers::*;
