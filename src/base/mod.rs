//! Core components, types, and utilities for the homework-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Error taxonomy for startup and poll cycles.
//! - Verdict texts and notification message formats.
//! - Clock and sleep abstractions for the poll loop.
//! - Log output setup.
//! - Common types and result handling.

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod verdicts;
