//! Constants used throughout the library
//!
//! This module centralizes magic strings, display defaults, and other
//! constant values to improve maintainability and consistency.

// Text Display Constants
/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

// Truncation width bounds for list rows
/// Minimum configurable truncation width in characters
pub const TRUNCATE_MIN_WIDTH: usize = 8;
/// Maximum configurable truncation width in characters
pub const TRUNCATE_MAX_WIDTH: usize = 120;
/// Default truncation width in characters
pub const TRUNCATE_DEFAULT_WIDTH: usize = 32;

// Calendar View Names
/// Calendar views the scheduling UI can open on
pub const CALENDAR_VIEWS: [&str; 3] = ["dia", "semana", "mes"];
/// Default calendar view
pub const DEFAULT_CALENDAR_VIEW: &str = "semana";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
