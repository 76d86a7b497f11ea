use web_sys::Window;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

/// Full page navigation, leaving the single-page router behind.
pub fn redirect_to(path: &str) -> Result<(), String> {
    window()?
        .location()
        .set_href(path)
        .map_err(|_| format!("Failed to navigate to {}", path))
}
