//! # Portfolio
//!
//! Backend for a data-science portfolio site: the project catalog behind the
//! Projects pages and the contact form endpoint.
//!
//! ## Usage
//!
//! ```bash
//! portfolio serve [--host 0.0.0.0] [--port 3000]
//! portfolio projects [--category predictive-modeling] [--search python]
//! ```
//!
//! ## Modules
//!
//! - `catalog` - Project records, category/search filtering, slug lookup and next-project navigation
//! - `contact` - Contact form validation and hand-off of accepted submissions
//! - `config` - Layered site configuration (defaults, TOML file, environment)
//! - `server` - axum HTTP API over the catalog and contact pipeline
//! - `error` - Crate error type
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod server;

pub use error::{Error, Result};
