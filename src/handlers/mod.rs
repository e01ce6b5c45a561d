//! Command handlers for the Jung session
//!
//! This module contains the implementation of each command.
//! Each handler is in a separate file for better organization.

pub mod add;
pub mod exit;
pub mod find;
pub mod list;
pub mod modify;
pub mod undo;
