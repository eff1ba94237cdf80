use std::fmt;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use url::Url;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub aladin: AladinConfig,
}

impl Config {
    /// TOML file at `path`, overridden by `SHELF_` environment variables.
    /// Nested keys are separated by `__`, e.g. `SHELF_ALADIN__API_KEY`.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("SHELF_").split("__"))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = Self::figment(path)
            .extract()
            .context("load configuration")?;
        config.aladin.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AladinConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default)]
    pub cover_size: CoverSize,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AladinConfig {
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)
            .with_context(|| format!("invalid Aladin endpoint {:?}", self.endpoint))?;
        ensure!(
            matches!(url.scheme(), "http" | "https"),
            "Aladin endpoint must use http or https: {}",
            self.endpoint
        );
        ensure!(!self.api_key.is_empty(), "Aladin api_key is empty");
        ensure!(
            (1..=100).contains(&self.max_results),
            "Aladin max_results must be between 1 and 100, got {}",
            self.max_results
        );
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for AladinConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            api_key: default_api_key(),
            max_results: default_max_results(),
            cover_size: CoverSize::default(),
            timeout_secs: None,
        }
    }
}

/// Cover image sizes accepted by the `Cover` parameter of the Aladin API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum CoverSize {
    #[default]
    Big,
    MidBig,
    Mid,
    Small,
    Mini,
    None,
}

impl CoverSize {
    pub fn as_str(self) -> &'static str {
        match self {
            CoverSize::Big => "Big",
            CoverSize::MidBig => "MidBig",
            CoverSize::Mid => "Mid",
            CoverSize::Small => "Small",
            CoverSize::Mini => "Mini",
            CoverSize::None => "None",
        }
    }
}

impl fmt::Display for CoverSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    "http://www.aladin.co.kr/ttb/api/ItemSearch.aspx".to_string()
}

fn default_api_key() -> String {
    "ttbsonginha22141002".to_string()
}

fn default_max_results() -> u32 {
    20
}
