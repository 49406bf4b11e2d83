// Host-side tests for scene configuration parsing.

use starwave_core::constants::{DEFAULT_LOGO_URL, DEFAULT_NAV_LABELS};
use starwave_core::{ConfigError, SceneConfig, WaveDetail, WavePreset};

#[test]
fn default_config_uses_documented_labels() {
    let c = SceneConfig::default();
    assert_eq!(c.wave, WavePreset::Full);
    assert_eq!(c.nav_labels, DEFAULT_NAV_LABELS.to_vec());
    assert_eq!(c.logo_url, DEFAULT_LOGO_URL);
    assert_eq!(c.seed, None);
}

#[test]
fn query_selects_preset_labels_and_seed() {
    let (c, errors) = SceneConfig::from_query("?wave=low&labels=Home,Our+Work,%20&seed=7&x=1");
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(c.wave, WavePreset::Low);
    assert_eq!(c.nav_labels, vec!["Home", "Our Work", "%20"]);
    assert_eq!(c.seed, Some(7));
}

#[test]
fn bad_values_are_reported_and_defaults_kept() {
    let (c, errors) = SceneConfig::from_query("wave=ultra&labels=,,&seed=abc&logo=");
    assert_eq!(c, SceneConfig::default());
    assert_eq!(
        errors,
        vec![
            ConfigError::UnknownWavePreset("ultra".to_string()),
            ConfigError::EmptyNavLabels,
            ConfigError::InvalidSeed("abc".to_string()),
            ConfigError::EmptyLogoUrl,
        ]
    );
}

#[test]
fn decoder_is_applied_to_values() {
    let (c, _) = SceneConfig::from_query_with("logo=cdn%2Flogo.png", |v| {
        Some(v.replace("%2F", "/"))
    });
    assert_eq!(c.logo_url, "cdn/logo.png");
}

#[test]
fn presets_map_to_grid_and_detail() {
    assert_eq!(WavePreset::Full.detail(), WaveDetail::Full);
    assert_eq!(WavePreset::Low.detail(), WaveDetail::Low);
    assert!(WavePreset::Low.grid().cols < WavePreset::Full.grid().cols);
    assert_eq!("FULL".parse::<WavePreset>(), Ok(WavePreset::Full));
}
