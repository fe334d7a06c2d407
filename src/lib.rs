//! REST API backend for a property-rental listing platform.
//!
//! Users register, create property listings ("spots"), attach images, and
//! leave starred reviews with images. Handlers validate input, enforce
//! ownership-based authorization, and shape JSON responses over a PostgreSQL
//! store.
//!
//! # Architecture
//!
//! - [`domain`] - Entities and repository traits
//! - [`infrastructure`] - PostgreSQL repository implementations
//! - [`application`] - Services orchestrating the business rules
//! - [`api`] - HTTP layer: DTOs, handlers, middleware, routes
//! - [`config`] / [`server`] - Startup wiring

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;
