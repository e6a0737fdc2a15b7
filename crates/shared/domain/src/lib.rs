//! # Domain Models
//!
//! Pure value types for the landing page and its registration form.
//! Keep it lean: no I/O, networking, or validation rules, just data and simple helpers.

pub mod attribution;
pub mod config;
pub mod constants;
pub mod form;
pub mod outcome;
pub mod route;
