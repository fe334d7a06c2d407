//! Application layer: services orchestrating the domain.

pub mod services;
