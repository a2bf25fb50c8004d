#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # shelter-entities
//!
//! Reusable, agnostic domain entities for the hurricane shelter locator.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod catalog;
pub mod geo;
pub mod id;
pub mod shelter;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
