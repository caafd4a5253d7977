// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod doctor_repository;
pub mod migrations;
pub mod review_repository;

pub use doctor_repository::*;
pub use migrations::apply_migrations;
pub use review_repository::*;
