//! Scene configuration and page query parsing.
//!
//! The page reads its options from the location query string, for example
//! `?wave=low&labels=Home,Work&seed=7`. Values are expected to be
//! percent-decoded by the caller.

use crate::constants::{DEFAULT_LOGO_URL, DEFAULT_NAV_LABELS};
use crate::error::ConfigError;
use crate::wave::{WaveDetail, WaveGridConfig};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WavePreset {
    #[default]
    Full,
    Low,
}

impl WavePreset {
    pub fn grid(self) -> WaveGridConfig {
        match self {
            WavePreset::Full => WaveGridConfig::full(),
            WavePreset::Low => WaveGridConfig::low(),
        }
    }

    pub fn detail(self) -> WaveDetail {
        match self {
            WavePreset::Full => WaveDetail::Full,
            WavePreset::Low => WaveDetail::Low,
        }
    }
}

impl FromStr for WavePreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "high" => Ok(WavePreset::Full),
            "low" | "lite" => Ok(WavePreset::Low),
            other => Err(ConfigError::UnknownWavePreset(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub wave: WavePreset,
    pub nav_labels: Vec<String>,
    pub logo_url: String,
    /// Fixed RNG seed for reproducible geometry; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            wave: WavePreset::default(),
            nav_labels: DEFAULT_NAV_LABELS.iter().map(|s| s.to_string()).collect(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Apply one `key=value` option. Unknown keys are ignored.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "wave" => self.wave = value.parse()?,
            "labels" => {
                let labels = value
                    .split(',')
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>();
                if labels.is_empty() {
                    return Err(ConfigError::EmptyNavLabels);
                }
                self.nav_labels = labels;
            }
            "logo" => {
                let url = value.trim();
                if url.is_empty() {
                    return Err(ConfigError::EmptyLogoUrl);
                }
                self.logo_url = url.to_string();
            }
            "seed" => {
                let seed = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(value.to_string()))?;
                self.seed = Some(seed);
            }
            _ => {}
        }
        Ok(())
    }

    /// Parse a query string (leading `?` optional). Invalid options are skipped and
    /// returned alongside the resulting config so the caller can report them.
    pub fn from_query(query: &str) -> (Self, Vec<ConfigError>) {
        Self::from_query_with(query, |v| Some(v.to_string()))
    }

    /// Like [`SceneConfig::from_query`] with a caller-supplied value decoder.
    pub fn from_query_with(
        query: &str,
        mut decode: impl FnMut(&str) -> Option<String>,
    ) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(&raw.replace('+', " ")).unwrap_or_else(|| raw.to_string());
            if let Err(e) = config.apply(key, &value) {
                errors.push(e);
            }
        }
        (config, errors)
    }
}
