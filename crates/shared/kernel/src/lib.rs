//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading and the page router.
//!
//! ## Config loading
//! ```rust,no_run
//! use p2h_kernel::config::load_config;
//! use p2h_kernel::domain::config::LandingConfig;
//!
//! let cfg: LandingConfig = load_config(Some("config/landing")).unwrap();
//! ```
//!
//! ## Navigation
//! ```rust
//! use p2h_kernel::domain::route::Route;
//! use p2h_kernel::router::Router;
//!
//! let router = Router::new("/");
//! router.navigate("/thanks");
//! assert_eq!(router.current(), Route::Thanks);
//! ```
pub mod config;
pub mod router;

pub use p2h_domain as domain;
