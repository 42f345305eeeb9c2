//! Global constants

/// Recognized image suffixes. Matching is case-sensitive, only these exact forms count.
pub const IMAGE_SUFFIXES: &[&str; 8] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".JPG", ".JPEG", ".PNG"];

pub const DEFAULT_REGION: &str = "us-east-1";

/// Single page cap for the list request (no continuation).
pub const LIST_MAX_KEYS: i32 = 1000;

pub const BANNER_WIDTH: usize = 60;

pub const DEFAULT_LOG_FILTER: &str = "warn";
