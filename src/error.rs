//! Error types. Nothing here is ever shown to a visitor: surface errors end
//! in a silent no-op and config errors are returned to the embedding script.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid particle field config: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid particle field config: `{}` {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ConfigError> for JsValue {
    fn from(e: ConfigError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Reasons the drawing surface could not be acquired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    NoWindow,
    NoDocument,
    CanvasNotFound(String),
    NotACanvas(String),
    ContextUnavailable,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NoWindow => write!(f, "no global window"),
            SurfaceError::NoDocument => write!(f, "window has no document"),
            SurfaceError::CanvasNotFound(id) => write!(f, "no element with id `{}`", id),
            SurfaceError::NotACanvas(id) => write!(f, "element `{}` is not a canvas", id),
            SurfaceError::ContextUnavailable => write!(f, "2d context unavailable"),
        }
    }
}

impl std::error::Error for SurfaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_names_field() {
        let e = ConfigError::Invalid {
            field: "link_distance",
            reason: "must be positive",
        };
        assert_eq!(
            e.to_string(),
            "invalid particle field config: `link_distance` must be positive"
        );
    }

    #[test]
    fn parse_error_keeps_source() {
        let e: ConfigError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn surface_errors_display() {
        assert_eq!(
            SurfaceError::CanvasNotFound("hero".into()).to_string(),
            "no element with id `hero`"
        );
    }
}
