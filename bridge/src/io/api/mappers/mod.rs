//! # Mappers
//!
//! The translation layer between SDK models and the plugin API types in
//! `shared`. Each mapper is a stateless unit struct whose associated
//! functions take an SDK value by value and return a freshly built API value.
//!
//! ## Conventions
//!
//! - Closed SDK enums are matched exhaustively. Variants meaning "unknown" or
//!   "none" translate to `None`, never to a default API constant.
//! - Raw brand and funding strings are looked up in constant tables; anything
//!   unrecognised translates to `None`.
//! - Integer amounts and battery levels widen to `f64`; a missing battery level
//!   becomes [`BATTERY_LEVEL_NOT_REPORTED`].
//! - Missing metadata becomes an empty map.
//! - A missing field the SDK guarantees (the reader serial number) is a
//!   [`MappingError`](crate::error::MappingError), not a default.

pub mod location_mapper;
pub mod metadata;
pub mod payment_intent_mapper;
pub mod payment_method_mapper;
pub mod reader_mapper;
pub mod software_update_mapper;
pub mod terminal_mapper;

pub use location_mapper::LocationMapper;
pub use metadata::to_hash_map;
pub use payment_intent_mapper::PaymentIntentMapper;
pub use payment_method_mapper::PaymentMethodMapper;
pub use reader_mapper::{ReaderMapper, BATTERY_LEVEL_NOT_REPORTED};
pub use software_update_mapper::SoftwareUpdateMapper;
pub use terminal_mapper::TerminalMapper;
