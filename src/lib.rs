//! evoscope - terminal dashboard for an evolution log
//!
//! Reads a JSON log of dated change entries, derives temporal metrics,
//! axis classification and a repetition verdict, and renders them together
//! with a seeded constellation layout and seeded mutation proposals.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`config`]: Command-line configuration
//! - [`engine`]: Analytics and generation engine
//! - [`keys`]: Key binding definitions
//! - [`logging`]: Tracing subscriber setup
//! - [`model`]: Domain models
//! - [`source`]: Log loading
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod engine;
pub mod keys;
pub mod logging;
pub mod model;
pub mod source;
pub mod ui;
