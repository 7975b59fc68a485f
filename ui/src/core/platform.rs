//! Platform detection and the host print primitive.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Ask the host to print the current surface.
///
/// Browsers block inside `window.print()` until the dialog closes; the desktop
/// webview resolves once the script has been dispatched. Either way the caller
/// only learns whether the host accepted the request.
pub async fn print_surface() -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or("window unavailable")?;
        window
            .print()
            .map_err(|err| format!("print rejected: {err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dioxus::document::eval("window.print(); return true;")
            .await
            .map(|_| ())
            .map_err(|err| format!("print rejected: {err:?}"))
    }
}
