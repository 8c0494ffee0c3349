//! User settings for GigForge
//!
//! Stored as `config.json` in the base directory. Every field has a default,
//! so a partial or older file still loads.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use image::Rgb;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::paths::GigForgePaths;
use crate::error::GigForgeError;
use crate::models::Money;
use crate::render::promo::{DEFAULT_BACKGROUND, DEFAULT_BRAND, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::render::{FontSources, PromoStyle};
use crate::services::DEFAULT_MARGIN;

/// Explicit font files for promo images
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular: Option<PathBuf>,
}

/// Promo canvas defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoSettings {
    /// Background colour as `[r, g, b]`
    #[serde(default = "default_background")]
    pub background: [u8; 3],

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for PromoSettings {
    fn default() -> Self {
        Self {
            background: default_background(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// User settings for GigForge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Brand printed in promo image footers
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    /// Proposal author when none is given
    #[serde(default = "default_author")]
    pub default_author: String,

    /// Markup used by `price` and `gig` when `--margin` is omitted
    #[serde(default = "default_margin")]
    pub default_margin: Decimal,

    /// Currency symbol for terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for terminal output (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub fonts: FontSettings,

    #[serde(default)]
    pub promo: PromoSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_brand_name() -> String {
    DEFAULT_BRAND.to_string()
}

fn default_author() -> String {
    crate::services::proposal::DEFAULT_AUTHOR.to_string()
}

fn default_margin() -> Decimal {
    DEFAULT_MARGIN
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_background() -> [u8; 3] {
    DEFAULT_BACKGROUND.0
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            brand_name: default_brand_name(),
            default_author: default_author(),
            default_margin: default_margin(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            fonts: FontSettings::default(),
            promo: PromoSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &GigForgePaths) -> Result<Self, GigForgeError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| GigForgeError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| GigForgeError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would only fail later, mid-command
    pub fn validate(&self) -> Result<(), GigForgeError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(GigForgeError::Config(format!(
                "Invalid date_format \"{}\"",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GigForgePaths) -> Result<(), GigForgeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GigForgeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| GigForgeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Font candidates: configured files, then the fonts directory, then system fonts
    pub fn font_sources(&self, paths: &GigForgePaths) -> FontSources {
        FontSources::system()
            .with_dir(&paths.fonts_dir())
            .with_preferred(self.fonts.bold.clone(), self.fonts.regular.clone())
    }

    /// Promo style from the configured brand, canvas and fonts
    pub fn promo_style(&self, paths: &GigForgePaths) -> PromoStyle {
        PromoStyle {
            background: Rgb(self.promo.background),
            width: self.promo.width,
            height: self.promo.height,
            brand: self.brand_name.clone(),
            fonts: self.font_sources(paths),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.brand_name, "NightAnvil");
        assert_eq!(settings.default_author, "Freelancer");
        assert_eq!(settings.default_margin, dec!(0.2));
        assert_eq!(settings.promo.background, [6, 4, 10]);
        assert_eq!((settings.promo.width, settings.promo.height), (1200, 630));
        assert_eq!(settings.fonts, FontSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GigForgePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.brand_name = "Forge & Co".into();
        settings.default_margin = dec!(0.35);
        settings.fonts.bold = Some(PathBuf::from("/fonts/Bold.ttf"));
        settings.save(&paths).unwrap();

        assert!(paths.is_initialized());
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GigForgePaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GigForgePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"brand_name": "Acme", "promo": {"width": 800}}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.brand_name, "Acme");
        assert_eq!(loaded.promo.width, 800);
        assert_eq!(loaded.promo.height, 630);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GigForgePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, GigForgeError::Config(_)));
    }

    #[test]
    fn test_invalid_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GigForgePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, GigForgeError::Config(_)));
        assert!(err.to_string().contains("%Q"));
    }

    #[test]
    fn test_custom_date_format_loads() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GigForgePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%d/%m/%Y"}"#).unwrap();

        assert_eq!(Settings::load_or_create(&paths).unwrap().date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_promo_style() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GigForgePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings.brand_name = "Acme".into();
        settings.promo.background = [1, 2, 3];

        let style = settings.promo_style(&paths);
        assert_eq!(style.brand, "Acme");
        assert_eq!(style.background, Rgb([1, 2, 3]));
        assert_eq!(style.fonts.bold[0], paths.fonts_dir().join("DejaVuSans-Bold.ttf"));
    }

    #[test]
    fn test_format_money() {
        let mut settings = Settings::default();
        assert_eq!(settings.format_money(Money::from_cents(60000)), "$600.00");
        settings.currency_symbol = "€".into();
        assert_eq!(settings.format_money(Money::from_cents(-500)), "€-5.00");
    }
}
