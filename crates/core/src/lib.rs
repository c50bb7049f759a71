//! Core types and rules for employee-registry
//!
//! This crate contains domain types shared across all other crates.

pub mod constants;
mod email;
mod employee;
pub mod env_config;

pub use constants::*;
pub use email::{EMAIL_PATTERN, is_valid_email};
pub use employee::{Employee, EmployeeInput};
