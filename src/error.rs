//! Error types shared by the theme controllers and the browser entry point.
//!
//! ERROR HANDLING
//! ==============
//! State-changing operations never fail. A bad stored preference is reported
//! here only so the controller can log it before falling back to following
//! the system. `Config` and `Browser` surface during startup only.

/// Stable machine-readable code for an error variant.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The dark-mode cookie holds something other than the four known literals.
    #[error("invalid stored dark mode preference: {value:?}")]
    InvalidStoredPreference { value: String },
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("browser environment unavailable: {0}")]
    Browser(String),
}

impl ErrorCode for ThemeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidStoredPreference { .. } => "E_INVALID_PREFERENCE",
            Self::Config(_) => "E_CONFIG",
            Self::Browser(_) => "E_BROWSER",
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<ThemeError> for wasm_bindgen::JsValue {
    fn from(err: ThemeError) -> Self {
        wasm_bindgen::JsValue::from_str(&format!("{}: {err}", err.error_code()))
    }
}
