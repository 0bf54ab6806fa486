//! FlavorForge - a terminal dashboard for food-product ideation.
//!
//! Browse market metrics, explore products, and walk through a guided
//! wizard that turns a target audience and flavor profile into AI-suggested
//! product concepts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing state, the wizard and use cases.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing the HTTP client, sample data and config.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "flavorforge";
