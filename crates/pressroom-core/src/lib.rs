//! Pressroom Core — domain models, error taxonomy, repository traits,
//! and the access decision engine.
//!
//! This crate has no I/O of its own: persistence is abstracted behind
//! the traits in [`repository`], and the authorization logic in
//! [`access`] is a pure function of the data handed to it.

pub mod access;
pub mod error;
pub mod models;
pub mod repository;

pub use error::{PressroomError, PressroomResult};
