//! # Hirondelle Core
//!
//! Domain types shared by the wedding reservation backend: the slot
//! catalog, reservation and guest-submission models, and the error type
//! the API layer maps onto HTTP responses.

pub mod catalog;
pub mod errors;
pub mod messages;
pub mod models;
