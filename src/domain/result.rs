//! Result type alias for cfgtemplate
//!
//! This module provides a convenient Result type alias that uses TemplateError
//! as the error type.

use super::errors::TemplateError;

/// Result type alias for cfgtemplate operations
///
/// # Examples
///
/// ```
/// use cfgtemplate::domain::result::Result;
/// use cfgtemplate::domain::errors::TemplateError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(TemplateError::Manifest("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, TemplateError>;
