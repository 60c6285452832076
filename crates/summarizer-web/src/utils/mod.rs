/// Utility functions for the web interface
///
/// Helpers for retention times, formatting, and input validation.

pub mod time;
pub mod validation;
pub mod format;
