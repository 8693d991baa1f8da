//! # copilot-rs
//!
//! Startup configuration for the system design copilot.
//!
//! Loads the generative-AI key and MongoDB settings from the environment
//! (optionally seeded from a `.env` file), fails fast naming every missing
//! variable, and sets up `tracing` with optional OTLP export.

pub mod config;
pub mod error;
pub mod telemetry;
