//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the services used by the homework-bot:
//! - The homework status API (e.g., Practicum)
//! - Notification delivery (e.g., Telegram)
//!
//! Each service module defines both a generic trait and a concrete implementation,
//! allowing for extensibility and easy testing.

pub mod api;
pub mod notifier;
