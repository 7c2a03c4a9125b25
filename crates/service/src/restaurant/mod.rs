//! Restaurant module: three-layer architecture (domain, repository, service).
//!
//! Centralizes the restaurant lifecycle and favourite-toggle business logic
//! under the service crate; persistence stays behind repository traits.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::RestaurantService;
