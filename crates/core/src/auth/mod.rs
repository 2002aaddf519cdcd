//! Stored-PIN hashing and verification.

mod pin;

pub use pin::{PinError, hash_pin, verify_pin};
