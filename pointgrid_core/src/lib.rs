//! Foundation utilities for the pointgrid workspace: a byte-level input
//! cursor, a compact JSON model with an order-preserving object type, and the
//! [`GeoBBox`] boundary rectangle.

pub mod byte_iterator;
pub mod json;
mod types;

pub use types::*;
