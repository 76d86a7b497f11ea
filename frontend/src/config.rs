use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const API_PATH: &str = "/api";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// reqwest only accepts absolute URLs, so a path-only value is anchored to the page origin.
fn absolutize(url: String, origin: Option<&str>) -> String {
    match origin.and_then(normalize_base_url) {
        Some(origin) if url.starts_with('/') => format!("{}{}", origin, url),
        _ => url,
    }
}

pub fn default_base_url(origin: Option<&str>) -> String {
    origin
        .and_then(normalize_base_url)
        .map(|origin| format!("{}{}", origin, API_PATH))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Picks the first usable candidate, falling back to `<origin>/api`.
pub fn resolve_base_url(
    candidates: impl IntoIterator<Item = Option<String>>,
    origin: Option<&str>,
) -> String {
    candidates
        .into_iter()
        .flatten()
        .find_map(|candidate| normalize_base_url(&candidate))
        .map(|url| absolutize(url, origin))
        .unwrap_or_else(|| default_base_url(origin))
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{anyhow, Context};

    fn read_global(object: &str, keys: &[&str]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &object.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&any, &(*key).into())
                .ok()
                .and_then(|value| value.as_string())
        })
    }

    // window.__PORTAL_ENV = { API_BASE_URL: "..." }, written by env.js
    pub fn from_env_js() -> Option<String> {
        read_global("__PORTAL_ENV", &["API_BASE_URL", "api_base_url"])
    }

    pub fn from_window_config() -> Option<String> {
        read_global("__PORTAL_CONFIG", &["api_base_url", "API_BASE_URL"])
    }

    pub fn origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    pub async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        let origin = origin().ok_or_else(|| anyhow!("no window origin"))?;
        let response = reqwest::get(&format!("{}/config.json", origin))
            .await
            .context("fetching config.json")?
            .error_for_status()
            .context("config.json status")?;
        response
            .json::<RuntimeConfig>()
            .await
            .context("parsing config.json")
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_base_url() -> String {
    let origin = browser::origin();
    let from_globals = browser::from_env_js().or_else(browser::from_window_config);
    let fetched = if from_globals.is_some() {
        None
    } else {
        match browser::fetch_runtime_config().await {
            Ok(cfg) => cfg.api_base_url,
            Err(err) => {
                log::warn!("runtime config unavailable, using defaults: {:#}", err);
                None
            }
        }
    };
    resolve_base_url([from_globals, fetched], origin.as_deref())
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_base_url() -> String {
    resolve_base_url(std::iter::empty(), None)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let resolved = load_base_url().await;
    API_BASE_URL.get_or_init(|| resolved).clone()
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::debug!("API base URL: {}", base_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes_and_rejects_blank() {
        assert_eq!(
            normalize_base_url("https://example.com/api/"),
            Some("https://example.com/api".into())
        );
        assert_eq!(normalize_base_url("  "), None);
        assert_eq!(normalize_base_url("/"), None);
    }

    #[test]
    fn first_non_blank_candidate_wins() {
        let url = resolve_base_url(
            [
                None,
                Some(" ".into()),
                Some("https://one.example/api".into()),
                Some("https://two.example/api".into()),
            ],
            Some("https://app.example"),
        );
        assert_eq!(url, "https://one.example/api");
    }

    #[test]
    fn path_only_candidate_is_anchored_to_origin() {
        let url = resolve_base_url([Some("/backend/".into())], Some("https://app.example"));
        assert_eq!(url, "https://app.example/backend");
    }

    #[test]
    fn falls_back_to_origin_api_then_localhost() {
        assert_eq!(
            resolve_base_url([None], Some("https://app.example/")),
            "https://app.example/api"
        );
        assert_eq!(resolve_base_url([None], None), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn runtime_config_parses_optional_base_url() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://x.example/api"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://x.example/api"));
        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, RuntimeConfig::default());
    }
}
