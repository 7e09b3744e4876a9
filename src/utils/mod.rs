//! Utility modules for the Agendista library.
//!
//! This module contains common utility functions and helpers that are used
//! throughout the library. These utilities provide functionality for
//! date/time handling, text display and other cross-cutting concerns.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date and time formatting, parsing, and manipulation functions
//! - [`text`] - Text truncation helpers for list rows
//!
//! # Design Philosophy
//!
//! All utilities follow these principles:
//!
//! - **Pure functions** when possible - Avoid side effects for predictable behavior
//! - **Error handling** - Proper error types and handling for robust operation
//! - **Testability** - Easy to unit test with clear inputs and outputs

pub mod datetime;
pub mod text;
