use log::{info, warn, Level};
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use wasm_bindgen::JsValue;
use yew::AttrValue;

const DEFAULT_SERVICE_BASE: &str = "https://wa.me";
const DEFAULT_RECIPIENT: &str = "5500000000000";
const DEFAULT_GREETING: &str = "Olá! Gostaria de uma consulta jurídica.";

/// Name of the object an embedding page can set before the wasm bundle boots.
pub const RUNTIME_CONFIG_KEY: &str = "__APP_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to read window.{0}")]
    Unreadable(&'static str),
    #[error("invalid runtime config: {0}")]
    Invalid(String),
}

impl From<serde_wasm_bindgen::Error> for ConfigError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

/// Where the call-to-action buttons send visitors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    pub service_base: String,
    pub recipient: String,
    pub greeting: String,
}

/// Optional fields of `window.__APP_CONFIG`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeOverrides {
    #[serde(default)]
    pub contact_service_base: Option<String>,
    #[serde(default, deserialize_with = "recipient_from_js")]
    pub contact_recipient: Option<String>,
    #[serde(default)]
    pub contact_greeting: Option<String>,
}

/// Phone-like ids are often written as bare JS numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecipientValue {
    Text(String),
    Whole(u64),
    Number(f64),
    Missing,
}

fn recipient_from_js<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RecipientValue::deserialize(deserializer)? {
        RecipientValue::Text(text) => Some(text),
        RecipientValue::Whole(n) => Some(n.to_string()),
        RecipientValue::Number(n) => Some(n.to_string()),
        RecipientValue::Missing => None,
    })
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl ContactConfig {
    // option_env! is read at compile time, rebuild after changing the vars.
    pub fn from_build_env() -> Self {
        Self {
            service_base: option_env!("CONTACT_SERVICE_BASE")
                .unwrap_or(DEFAULT_SERVICE_BASE)
                .to_string(),
            recipient: option_env!("CONTACT_RECIPIENT")
                .unwrap_or(DEFAULT_RECIPIENT)
                .to_string(),
            greeting: option_env!("CONTACT_GREETING")
                .unwrap_or(DEFAULT_GREETING)
                .to_string(),
        }
    }

    pub fn with_overrides(mut self, overrides: RuntimeOverrides) -> Self {
        if let Some(base) = overrides.contact_service_base {
            self.service_base = base;
        }
        if let Some(recipient) = overrides.contact_recipient {
            self.recipient = recipient;
        }
        if let Some(greeting) = overrides.contact_greeting {
            self.greeting = greeting;
        }
        self
    }

    /// `<service-base>/<recipient>?text=<greeting>`, greeting percent-encoded.
    pub fn link(&self) -> String {
        format!(
            "{}/{}?text={}",
            self.service_base.trim_end_matches('/'),
            self.recipient,
            urlencoding::encode(&self.greeting)
        )
    }
}

/// Contact link shared with every call-to-action through a Yew context.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactLink(pub AttrValue);

impl ContactLink {
    pub fn from_config(config: &ContactConfig) -> Self {
        ContactLink(AttrValue::from(config.link()))
    }
}

impl Default for ContactLink {
    fn default() -> Self {
        Self::from_config(&ContactConfig::default())
    }
}

pub fn runtime_overrides() -> Result<Option<RuntimeOverrides>, ConfigError> {
    let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY))
        .map_err(|_| ConfigError::Unreadable(RUNTIME_CONFIG_KEY))?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_wasm_bindgen::from_value(raw)?))
}

/// Build defaults merged with whatever the host page injected. Never fails;
/// a broken runtime object is logged and skipped.
pub fn load() -> ContactConfig {
    let config = ContactConfig::from_build_env();
    match runtime_overrides() {
        Ok(Some(overrides)) => {
            info!("applying runtime contact overrides");
            config.with_overrides(overrides)
        }
        Ok(None) => config,
        Err(e) => {
            warn!("ignoring runtime config: {}", e);
            config
        }
    }
}

pub fn log_level() -> Level {
    option_env!("LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::Info)
}
