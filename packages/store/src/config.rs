//! # Dashboard configuration: `dashboard.toml`
//!
//! Centralises the constants the remote views need: where the statistics API
//! lives, which historical window to request, and how the map tiles are
//! fetched. The web package embeds its `dashboard.toml` at compile time.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://disease.sh/v3/covid-19"
//! lastdays = "all"
//!
//! [map]
//! tile_url = "https://tile.openstreetmap.org/{z}/{x}/{y}.png"
//! zoom = 2
//! ```
//!
//! Every field is defaulted, so a missing or empty file is equivalent to
//! [`DashboardConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub map: MapConfig,
}

/// Statistics API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `lastdays` query parameter for the historical series.
    #[serde(default = "default_lastdays")]
    pub lastdays: String,
}

fn default_base_url() -> String {
    "https://disease.sh/v3/covid-19".to_string()
}

fn default_lastdays() -> String {
    "all".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            lastdays: default_lastdays(),
        }
    }
}

/// Map tile settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Tile URL template with `{z}`, `{x}` and `{y}` placeholders.
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

fn default_tile_url() -> String {
    "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_zoom() -> u8 {
    2
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: default_tile_url(),
            zoom: default_zoom(),
        }
    }
}

impl MapConfig {
    /// Expand the tile template for one tile.
    pub fn tile_href(&self, x: u32, y: u32) -> String {
        self.tile_url
            .replace("{z}", &self.zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

impl DashboardConfig {
    /// Builder method to point the remote views at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
