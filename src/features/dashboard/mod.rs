//! Dashboard feature module for the data shown after signing in. All calls
//! go out with session credentials attached; the backend enforces the real
//! role checks.

pub(crate) mod client;
pub(crate) mod types;
