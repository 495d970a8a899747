use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::{OnceLock, RwLock};

const WINDOW_CONFIG_KEY: &str = "__KINTAI_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
}

impl TeamMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Shape of `window.__KINTAI_CONFIG` and `./config.json`. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub self_user: Option<TeamMember>,
    #[serde(default)]
    pub roster: Option<Vec<TeamMember>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub time_zone: Tz,
    pub is_admin: bool,
    pub self_user: TeamMember,
    pub roster: Vec<TeamMember>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            time_zone: Tz::UTC,
            is_admin: true,
            self_user: TeamMember::new("me", "あなた"),
            roster: default_roster(),
        }
    }
}

impl AppConfig {
    pub fn from_runtime(raw: RuntimeConfig) -> Self {
        let defaults = Self::default();
        let time_zone = match raw.time_zone.as_deref() {
            Some(name) => name.parse::<Tz>().unwrap_or_else(|err| {
                log::warn!("unknown time zone {name:?} ({err}); using UTC");
                defaults.time_zone
            }),
            None => defaults.time_zone,
        };
        Self {
            time_zone,
            is_admin: raw.is_admin.unwrap_or(defaults.is_admin),
            self_user: raw.self_user.unwrap_or(defaults.self_user),
            roster: raw.roster.unwrap_or(defaults.roster),
        }
    }
}

fn default_roster() -> Vec<TeamMember> {
    vec![
        TeamMember::new("yamada", "山田太郎"),
        TeamMember::new("tanaka", "田中花子"),
        TeamMember::new("oguri", "小栗旬"),
    ]
}

static APP_CONFIG: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<AppConfig> {
    APP_CONFIG.get_or_init(|| RwLock::new(AppConfig::default()))
}

fn install(config: AppConfig) {
    match config_cell().write() {
        Ok(mut guard) => *guard = config,
        Err(_) => log::error!("runtime config lock poisoned; keeping previous config"),
    }
}

pub fn current() -> AppConfig {
    config_cell()
        .read()
        .map(|guard| guard.clone())
        .unwrap_or_default()
}

pub fn current_time_zone() -> Tz {
    current().time_zone
}

fn read_window_config() -> anyhow::Result<Option<RuntimeConfig>> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
    let value = js_sys::Reflect::get(&window, &WINDOW_CONFIG_KEY.into())
        .map_err(|_| anyhow!("failed to read window.{WINDOW_CONFIG_KEY}"))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let json = js_sys::JSON::stringify(&value)
        .map_err(|_| anyhow!("window.{WINDOW_CONFIG_KEY} is not serializable"))?;
    let text = String::from(json);
    let parsed = serde_json::from_str(&text)
        .with_context(|| format!("window.{WINDOW_CONFIG_KEY} has an unexpected shape"))?;
    Ok(Some(parsed))
}

async fn fetch_config_json() -> anyhow::Result<RuntimeConfig> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| anyhow!("failed to read window.location.origin"))?;
    let response = reqwest::get(format!("{origin}/config.json"))
        .await
        .context("config.json request failed")?;
    if !response.status().is_success() {
        return Err(anyhow!("config.json returned {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .context("config.json has an unexpected shape")
}

async fn resolve_runtime_config() -> anyhow::Result<RuntimeConfig> {
    if let Some(config) = read_window_config()? {
        return Ok(config);
    }
    fetch_config_json().await
}

/// Resolves the runtime config once at startup. Falls back to defaults.
pub async fn init() {
    let config = match resolve_runtime_config().await {
        Ok(raw) => AppConfig::from_runtime(raw),
        Err(err) => {
            log::warn!("runtime config unavailable, using defaults: {err:#}");
            AppConfig::default()
        }
    };
    install(config);
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn window_config_is_read_from_global() {
        let window = web_sys::window().unwrap();
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"is_admin".into(), &false.into()).unwrap();
        js_sys::Reflect::set(&window, &WINDOW_CONFIG_KEY.into(), &obj).unwrap();

        let raw = read_window_config().unwrap().unwrap();
        assert_eq!(raw.is_admin, Some(false));

        js_sys::Reflect::delete_property(&window, &WINDOW_CONFIG_KEY.into()).unwrap();
        assert!(read_window_config().unwrap().is_none());
    }
}
