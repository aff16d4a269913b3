//! Shared Dioxus components and D3.js bridge for the RSV coverage dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js coverage chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components for the filter sidebar and chart pane

pub mod js_bridge;
pub mod state;
pub mod components;
