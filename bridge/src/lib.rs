//! Translation of Stripe Terminal SDK models into the plain API types exchanged
//! with the plugin host.
//!
//! ## Architecture
//!
//! ```text
//! SDK models (sdk)
//!     ↓  mappers (io::api::mappers)
//! API types (shared)
//!     ↓  codec (io::api::codec)
//! Plugin channel
//! ```
//!
//! Every mapper is a pure function: no state is kept between calls and
//! translations can run concurrently from any thread.

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod sdk;

pub use config::{BridgeConfig, LogFormat};
pub use error::{BridgeError, MappingError};
pub use io::api::codec::ApiCodec;
pub use io::api::mappers::*;
