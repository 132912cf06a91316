use cosmic::cosmic_config::{self, Config, ConfigGet, ConfigSet, CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

pub const CONFIG_VERSION: u64 = 1;
pub const APP_ID: &str = "io.github.vows.Vows";

/// Slide change interval used when nothing valid is configured
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 5000;

/// Bounds offered in the settings drawer, in seconds
pub const MIN_TICK_SECS: u32 = 1;
pub const MAX_TICK_SECS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AppTheme {
    #[default]
    System,
    /// Lilac accents on the invitation's off-white
    Blush,
    /// Plum background with lilac accents
    Plum,
}

impl AppTheme {
    pub const ALL: &'static [Self] = &[Self::System, Self::Blush, Self::Plum];

    fn is_light(self) -> bool {
        matches!(self, AppTheme::Blush)
    }

    /// Background and accent as 0xRRGGBB
    fn colors(self) -> Option<(u32, u32)> {
        match self {
            AppTheme::System => None,
            AppTheme::Blush => Some((0xF5F4F5, 0x49284D)),
            AppTheme::Plum => Some((0x49284D, 0xC587CD)),
        }
    }

    pub fn to_cosmic_theme(self) -> cosmic::Theme {
        use cosmic::cosmic_theme::ThemeBuilder;
        use palette::{Srgb, Srgba};
        use std::sync::Arc;

        let Some((background, accent)) = self.colors() else {
            return cosmic::theme::system_preference();
        };

        let to_srgb = |hex: u32| -> Srgb {
            Srgb::new(
                ((hex >> 16) & 0xFF) as f32 / 255.0,
                ((hex >> 8) & 0xFF) as f32 / 255.0,
                (hex & 0xFF) as f32 / 255.0,
            )
        };
        let to_srgba = |hex: u32| -> Srgba {
            let rgb = to_srgb(hex);
            Srgba::new(rgb.red, rgb.green, rgb.blue, 1.0)
        };

        let builder = if self.is_light() {
            ThemeBuilder::light()
        } else {
            ThemeBuilder::dark()
        };

        let theme = builder
            .bg_color(to_srgba(background))
            .accent(to_srgb(accent))
            .build();

        cosmic::Theme::custom(Arc::new(theme))
    }
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppTheme::System => write!(f, "System"),
            AppTheme::Blush => write!(f, "Blush"),
            AppTheme::Plum => write!(f, "Plum"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub app_theme: AppTheme,
    pub tick_interval_ms: u64,
    pub autoplay: bool,
    pub remember_last_dir: bool,
    pub last_dir: Option<String>,
    pub show_hidden_files: bool,
    pub video_url: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            autoplay: true,
            remember_last_dir: true,
            last_dir: None,
            show_hidden_files: false,
            video_url: None,
        }
    }
}

impl GalleryConfig {
    /// Zero would never tick, so it falls back to the default
    pub fn tick_interval(&self) -> Duration {
        if self.tick_interval_ms == 0 {
            Duration::from_millis(DEFAULT_TICK_INTERVAL_MS)
        } else {
            Duration::from_millis(self.tick_interval_ms)
        }
    }

    /// Interval in whole seconds for the settings spinner
    pub fn tick_interval_secs(&self) -> u32 {
        let secs = self.tick_interval().as_secs().min(u64::from(u32::MAX)) as u32;
        secs.clamp(MIN_TICK_SECS, MAX_TICK_SECS)
    }

    pub fn set_tick_interval_secs(&mut self, secs: u32) {
        self.tick_interval_ms = u64::from(secs.clamp(MIN_TICK_SECS, MAX_TICK_SECS)) * 1000;
    }
}

impl CosmicConfigEntry for GalleryConfig {
    const VERSION: u64 = CONFIG_VERSION;

    fn write_entry(&self, config: &cosmic_config::Config) -> Result<(), cosmic_config::Error> {
        config.set("app_theme", self.app_theme)?;
        config.set("tick_interval_ms", self.tick_interval_ms)?;
        config.set("autoplay", self.autoplay)?;
        config.set("remember_last_dir", self.remember_last_dir)?;
        config.set("last_dir", self.last_dir.clone())?;
        config.set("show_hidden_files", self.show_hidden_files)?;
        config.set("video_url", self.video_url.clone())?;
        Ok(())
    }

    fn get_entry(
        config: &cosmic_config::Config,
    ) -> Result<Self, (Vec<cosmic_config::Error>, Self)> {
        let mut errors = Vec::new();
        let mut cfg = GalleryConfig::default();

        macro_rules! get_field {
            ($name:literal, $field:ident, $type:ty) => {
                match config.get::<$type>($name) {
                    Ok(val) => cfg.$field = val,
                    Err(e) => errors.push(e),
                }
            };
        }

        get_field!("app_theme", app_theme, AppTheme);
        get_field!("tick_interval_ms", tick_interval_ms, u64);
        get_field!("autoplay", autoplay, bool);
        get_field!("remember_last_dir", remember_last_dir, bool);
        get_field!("last_dir", last_dir, Option<String>);
        get_field!("show_hidden_files", show_hidden_files, bool);
        get_field!("video_url", video_url, Option<String>);

        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err((errors, cfg))
        }
    }

    fn update_keys<T: AsRef<str>>(
        &mut self,
        config: &cosmic_config::Config,
        changed_keys: &[T],
    ) -> (Vec<cosmic_config::Error>, Vec<&'static str>) {
        let mut errors = Vec::new();
        let mut updated = Vec::new();

        for key in changed_keys {
            match key.as_ref() {
                "tick_interval_ms" => match config.get::<u64>("tick_interval_ms") {
                    Ok(val) => {
                        self.tick_interval_ms = val;
                        updated.push("tick_interval_ms");
                    }
                    Err(e) => errors.push(e),
                },
                "autoplay" => match config.get::<bool>("autoplay") {
                    Ok(val) => {
                        self.autoplay = val;
                        updated.push("autoplay");
                    }
                    Err(e) => errors.push(e),
                },
                "show_hidden_files" => match config.get::<bool>("show_hidden_files") {
                    Ok(val) => {
                        self.show_hidden_files = val;
                        updated.push("show_hidden_files");
                    }
                    Err(e) => errors.push(e),
                },
                "video_url" => match config.get::<Option<String>>("video_url") {
                    Ok(val) => {
                        self.video_url = val;
                        updated.push("video_url");
                    }
                    Err(e) => errors.push(e),
                },
                _ => {}
            }
        }

        (errors, updated)
    }
}

pub fn config() -> Result<Config, cosmic_config::Error> {
    Config::new(APP_ID, CONFIG_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = GalleryConfig::default();
        assert_eq!(cfg.tick_interval(), Duration::from_millis(5000));
        assert!(cfg.autoplay);
        assert!(!cfg.show_hidden_files);
        assert_eq!(cfg.app_theme, AppTheme::System);
    }

    #[test]
    fn test_zero_interval_falls_back() {
        let cfg = GalleryConfig {
            tick_interval_ms: 0,
            ..GalleryConfig::default()
        };
        assert_eq!(cfg.tick_interval(), Duration::from_millis(DEFAULT_TICK_INTERVAL_MS));
        assert_eq!(cfg.tick_interval_secs(), 5);
    }

    #[test]
    fn test_interval_seconds_clamped() {
        let mut cfg = GalleryConfig::default();

        cfg.set_tick_interval_secs(8);
        assert_eq!(cfg.tick_interval_ms, 8000);

        cfg.set_tick_interval_secs(0);
        assert_eq!(cfg.tick_interval_ms, 1000);

        cfg.set_tick_interval_secs(600);
        assert_eq!(cfg.tick_interval_ms, 60_000);

        cfg.tick_interval_ms = 250;
        assert_eq!(cfg.tick_interval_secs(), MIN_TICK_SECS);
    }

    #[test]
    fn test_theme_palette() {
        assert_eq!(AppTheme::System.colors(), None);
        assert!(AppTheme::Blush.is_light());
        assert!(!AppTheme::Plum.is_light());
        assert_eq!(AppTheme::Plum.to_string(), "Plum");
        assert_eq!(AppTheme::ALL.len(), 3);
    }
}
