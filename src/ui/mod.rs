//! UI layer
//!
//! Contains views, widgets, components, symbols, and theme definitions.
//! Renderers only read engine output; they never compute analytics.

pub mod components;
pub mod navigation;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;
