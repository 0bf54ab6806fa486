//! FlavorForge backend HTTP client.

mod client;
mod dto;

pub use client::FlavorForgeClient;
