//! Poll cycle handling for homework-bot.
//!
//! This module provides the steps of a single poll cycle:
//! - Validating the API payload
//! - Extracting displayable statuses from homework records
//! - Tracking what has already been reported
//! - Coordinating notifications and error reports for a cycle

pub mod cycle;
pub mod state;
pub mod status;
pub mod validate;
