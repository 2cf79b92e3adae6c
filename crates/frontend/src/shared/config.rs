use serde::Deserialize;

/// Page configuration.
///
/// Every key is optional in an override; missing keys keep their default.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PosConfig {
    /// Prefix for the endpoint paths below. Empty means same origin.
    pub api_base: String,
    pub checkout_path: String,
    pub materials_path: String,
    /// Delay before the page reloads after a successful sale
    pub reload_delay_ms: u32,
    pub currency_symbol: String,
    pub log_level: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
api_base = ""
checkout_path = "/checkout"
materials_path = "/api/materials"
reload_delay_ms = 1000
currency_symbol = "₱"
log_level = "debug"
"#;

/// Id of the optional `<script type="application/toml">` override element
pub const CONFIG_ELEMENT_ID: &str = "pos-config";

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            checkout_path: "/checkout".to_string(),
            materials_path: "/api/materials".to_string(),
            reload_delay_ms: 1000,
            currency_symbol: "₱".to_string(),
            log_level: "debug".to_string(),
        }
    }
}

impl PosConfig {
    pub fn parse(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    pub fn checkout_url(&self) -> String {
        self.url(&self.checkout_path)
    }

    pub fn materials_url(&self) -> String {
        self.url(&self.materials_path)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Where the active configuration came from, reported once logging is up.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Embedded,
    Page,
    /// The page override failed to parse; carries the parse error
    InvalidPage(String),
}

/// Load configuration
///
/// Search order:
/// 1. `<script id="pos-config" type="application/toml">` on the host page
/// 2. Falls back to embedded default config
pub fn load_config() -> (PosConfig, ConfigSource) {
    resolve(page_override().as_deref())
}

fn resolve(page: Option<&str>) -> (PosConfig, ConfigSource) {
    let embedded = PosConfig::parse(DEFAULT_CONFIG).unwrap_or_default();
    match page {
        None => (embedded, ConfigSource::Embedded),
        Some(contents) => match PosConfig::parse(contents) {
            Ok(config) => (config, ConfigSource::Page),
            Err(e) => (embedded, ConfigSource::InvalidPage(e)),
        },
    }
}

fn page_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|s| !s.trim().is_empty())
}
