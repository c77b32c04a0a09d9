// src/api/mod.rs
//! Ghost Admin API interaction, the remote side of publishing.
//!
//! I/O (`client`), wire shapes (`responses`) and interpretation (`parser`)
//! are kept apart; the pipeline only sees the capability traits that
//! [`GhostHttpClient`] implements.

mod auth;
pub mod client;
mod mime;
pub mod parser;
mod responses;

pub use auth::{sign_admin_token, AdminClaims};
pub use client::{ApiResponse, GhostHttpClient};
pub use mime::image_type_for;
