//! Core library for the `volley` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI
//! argument types, configuration parsing, the HTTP client wrapper, and
//! the concurrent dispatch harness. The primary user-facing interface is
//! the `volley` command-line application; library APIs may evolve as the
//! CLI grows.
pub mod args;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod entry;
pub mod error;
pub mod logger;
