//! Domain models for Pressroom.
//!
//! These are the core types shared across all crates.

pub mod article;
pub mod permission;
pub mod user;
