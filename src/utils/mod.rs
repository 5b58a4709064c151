//! Utility functions and helpers
//!
//! This module contains timestamp utilities shared by the stores and the API.

pub mod time;

pub use time::{date_utc, deserialize_optional_timestamp, now, parse_timestamp};
