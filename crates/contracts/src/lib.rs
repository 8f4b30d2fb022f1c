//! Shared contracts for the article dashboard.
//!
//! Everything in this crate is framework-free so it can be unit tested on the
//! host: wire DTOs, the editor status machine, pagination arithmetic and the
//! debounce/sequencing policy used by the frontend.

pub mod domain;
pub mod shared;
