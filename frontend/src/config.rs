use crate::images::{default_image_hosts, RemotePattern};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8686/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub image_hosts: Option<Vec<RemotePattern>>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static IMAGE_HOSTS: OnceLock<Vec<RemotePattern>> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str, keys: &[&str]) -> Option<String> {
    use wasm_bindgen::JsValue;

    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &JsValue::from_str(name)).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &JsValue::from_str(key)).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    // window.__STOREFRONT_ENV (env.js) wins over window.__STOREFRONT_CONFIG.
    read_global("__STOREFRONT_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global("__STOREFRONT_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = reqwest::Url::parse(&href).ok()?.join("config.json").ok()?;
    let resp = reqwest::get(url).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

/// Resolves the runtime configuration once. Later calls are cheap no-ops.
pub async fn init() {
    if API_BASE_URL.get().is_some() && IMAGE_HOSTS.get().is_some() {
        return;
    }
    let fetched = fetch_runtime_config().await.unwrap_or_default();
    let _ = IMAGE_HOSTS.set(fetched.image_hosts.unwrap_or_else(default_image_hosts));
    let base = snapshot_from_globals()
        .or(fetched.api_base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    cache_base_url(&base);
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    init().await;
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Allow-listed remote image hosts; defaults until `init` has run.
pub fn image_hosts() -> Vec<RemotePattern> {
    IMAGE_HOSTS.get().cloned().unwrap_or_else(default_image_hosts)
}
