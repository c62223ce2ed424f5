//! Scroll Chat library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod backend;
pub mod config;
pub mod content;
pub mod deletion;
pub mod error;
pub mod grouping;
pub mod model;
pub mod protocol;
pub mod state;
pub mod timestamp;
pub mod toast;
pub mod ui;
pub mod viewer;

#[cfg(test)]
mod integration_tests;
