use wasm_bindgen::JsValue;

/// Error type produced by the web backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebError {
    /// The DOM APIs are not accessible (e.g., when executed outside of a browser).
    #[error("DOM is not available")]
    DomUnavailable,
    /// A page element the operation depends on is absent.
    #[error("no element matches `{0}`")]
    MissingElement(String),
    /// The supplied configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Wrapper around JavaScript exceptions.
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl WebError {
    /// Creates a [`WebError::MissingElement`] for `selector`.
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }

    /// Whether the error only means the page lacks an optional element.
    #[must_use]
    pub const fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}

impl From<serde_json::Error> for WebError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}

impl From<WebError> for JsValue {
    fn from(value: WebError) -> Self {
        match value {
            WebError::Js(msg) => Self::from(msg),
            other => Self::from(other.to_string()),
        }
    }
}

/// Swallows the outcome of an event handler or entry point after logging failures.
///
/// Missing elements are expected on pages that omit optional parts, so they are
/// only logged at debug level.
pub fn report(operation: &str, result: Result<(), WebError>) {
    match result {
        Ok(()) => {}
        Err(error) if error.is_missing_element() => {
            tracing::debug!(target: "reviewkit::web", operation, %error, "skipped");
        }
        Err(error) => {
            tracing::warn!(target: "reviewkit::web", operation, %error, "failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_selector() {
        assert_eq!(
            WebError::missing("#searchInput").to_string(),
            "no element matches `#searchInput`"
        );
    }

    #[test]
    fn json_errors_become_config_errors() {
        let error: WebError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(error, WebError::Config(_)));
        assert!(!error.is_missing_element());
    }

    #[test]
    fn report_never_panics() {
        report("search", Ok(()));
        report("search", Err(WebError::missing(".search-button")));
        report("search", Err(WebError::DomUnavailable));
    }
}
