//! Shared utilities.

pub mod password;
pub mod token;
