//! Core business logic layer
//!
//! This module contains the catalog, its data structures, the projection
//! helpers (filtering and grouping), form validation, and the operations
//! hub tying them together.

pub mod attribute;
pub mod catalog;
pub mod data;
pub mod filter;
pub mod forms;
pub mod grouping;
pub mod navigation;
pub mod operations;
pub mod seed;
pub mod store;
pub mod traits;
