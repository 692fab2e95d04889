//=========================================================================
// Engine Configuration
//=========================================================================
//
// Graphics configuration consumed by the application shell, plus the
// engine-wide settings loaded from TOML.
//
// File layout:
// ```toml
// [graphics]
// screen_width = 1280
// screen_height = 720
// app_name = "Sandbox"
//
// [runtime]
// tps = 60.0
// channel_capacity = 128
//
// [assets]
// search_paths = ["assets"]
//
// [memory]
// budget_bytes = 67108864
// ```
//
// Every section and field is optional; missing values take defaults.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::error::ConfigError;

//=== BuildMode ===========================================================

/// Compile-time build flavor, controlling the debug-only subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Build mode of the current compilation (`debug_assertions`).
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    /// Whether the debug manager is constructed in this mode.
    pub fn includes_debug_manager(self) -> bool {
        matches!(self, Self::Debug)
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::current()
    }
}

//=== GfxConfiguration ====================================================

/// Window and framebuffer setup requested by the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GfxConfiguration {
    pub red_bits: u32,
    pub green_bits: u32,
    pub blue_bits: u32,
    pub alpha_bits: u32,
    pub depth_bits: u32,
    pub stencil_bits: u32,
    /// Multisample count; 0 disables MSAA.
    pub msaa_samples: u32,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Window title and log identifier.
    pub app_name: String,
}

impl Default for GfxConfiguration {
    fn default() -> Self {
        Self {
            red_bits: 8,
            green_bits: 8,
            blue_bits: 8,
            alpha_bits: 8,
            depth_bits: 24,
            stencil_bits: 0,
            msaa_samples: 0,
            screen_width: 1920,
            screen_height: 1080,
            app_name: String::from("Aetheric"),
        }
    }
}

impl GfxConfiguration {
    /// Sets the application name.
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Sets the screen size in logical pixels.
    pub fn with_screen_size(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Sets the MSAA sample count.
    pub fn with_msaa(mut self, samples: u32) -> Self {
        self.msaa_samples = samples;
        self
    }

    /// Total color bits per pixel.
    pub fn color_bits(&self) -> u32 {
        self.red_bits + self.green_bits + self.blue_bits + self.alpha_bits
    }

    /// Width / height; 0.0 if height is zero.
    pub fn aspect_ratio(&self) -> f32 {
        if self.screen_height == 0 {
            return 0.0;
        }
        self.screen_width as f32 / self.screen_height as f32
    }

    /// Rejects configurations no backend could satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen size must be non-zero, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }

        for (channel, bits) in [
            ("red", self.red_bits),
            ("green", self.green_bits),
            ("blue", self.blue_bits),
            ("alpha", self.alpha_bits),
        ] {
            if bits > 16 {
                return Err(ConfigError::Invalid(format!(
                    "{} channel supports at most 16 bits, got {}",
                    channel, bits
                )));
            }
        }

        if !matches!(self.depth_bits, 0 | 16 | 24 | 32) {
            return Err(ConfigError::Invalid(format!(
                "depth bits must be 0, 16, 24 or 32, got {}",
                self.depth_bits
            )));
        }

        if !matches!(self.stencil_bits, 0 | 8) {
            return Err(ConfigError::Invalid(format!(
                "stencil bits must be 0 or 8, got {}",
                self.stencil_bits
            )));
        }

        if self.msaa_samples != 0
            && (!self.msaa_samples.is_power_of_two() || self.msaa_samples > 16)
        {
            return Err(ConfigError::Invalid(format!(
                "msaa samples must be 0 or a power of two up to 16, got {}",
                self.msaa_samples
            )));
        }

        Ok(())
    }
}

//=== RuntimeConfig =======================================================

/// Engine loop pacing and channel sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Logic ticks per second.
    pub tps: f64,
    /// Capacity of the platform → engine event channel.
    pub channel_capacity: usize,
}

impl RuntimeConfig {
    /// Duration of one logic tick.
    ///
    /// Fails unless `1 / tps` is a representable, non-zero `Duration`.
    pub fn tick_duration(&self) -> Result<Duration, ConfigError> {
        if !(self.tps > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tps must be positive, got {}",
                self.tps
            )));
        }

        match Duration::try_from_secs_f64(1.0 / self.tps) {
            Ok(tick) if !tick.is_zero() => Ok(tick),
            _ => Err(ConfigError::Invalid(format!(
                "tps {} does not give a usable tick duration",
                self.tps
            ))),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
        }
    }
}

//=== AssetConfig =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Initial asset search paths, in lookup order.
    pub search_paths: Vec<PathBuf>,
}

//=== MemoryConfig ========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Upper bound on live bytes handed out by the memory manager.
    pub budget_bytes: Option<usize>,
}

//=== EngineConfig ========================================================

/// Complete engine configuration, as loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub graphics: GfxConfiguration,
    pub runtime: RuntimeConfig,
    pub assets: AssetConfig,
    pub memory: MemoryConfig,
}

impl EngineConfig {
    /// Parses configuration from TOML text and validates it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file and validates it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.graphics.validate()?;

        self.runtime.tick_duration()?;

        if self.runtime.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel capacity must be positive".into(),
            ));
        }

        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // GfxConfiguration Tests
    //=====================================================================

    #[test]
    fn gfx_defaults() {
        let config = GfxConfiguration::default();
        assert_eq!(config.color_bits(), 32);
        assert_eq!(config.depth_bits, 24);
        assert_eq!(config.stencil_bits, 0);
        assert_eq!((config.screen_width, config.screen_height), (1920, 1080));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn gfx_builder_methods() {
        let config = GfxConfiguration::default()
            .with_app_name("Sandbox")
            .with_screen_size(1280, 720)
            .with_msaa(4);
        assert_eq!(config.app_name, "Sandbox");
        assert_eq!(config.screen_width, 1280);
        assert_eq!(config.msaa_samples, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn gfx_aspect_ratio() {
        let config = GfxConfiguration::default().with_screen_size(1600, 800);
        assert_eq!(config.aspect_ratio(), 2.0);
    }

    #[test]
    fn gfx_rejects_zero_size() {
        let config = GfxConfiguration::default().with_screen_size(0, 720);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn gfx_rejects_odd_msaa() {
        let config = GfxConfiguration::default().with_msaa(3);
        assert!(config.validate().is_err());

        let config = GfxConfiguration::default().with_msaa(32);
        assert!(config.validate().is_err());
    }

    #[test]
    fn gfx_rejects_unsupported_depth() {
        let config = GfxConfiguration {
            depth_bits: 12,
            ..GfxConfiguration::default()
        };
        assert!(config.validate().is_err());
    }

    //=====================================================================
    // EngineConfig Tests
    //=====================================================================

    #[test]
    fn empty_toml_yields_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let text = r#"
            [graphics]
            app_name = "Sandbox"
            screen_width = 800
            screen_height = 600

            [runtime]
            tps = 30.0

            [assets]
            search_paths = ["assets", "shared/assets"]

            [memory]
            budget_bytes = 1024
        "#;

        let config = EngineConfig::from_toml_str(text).unwrap();
        assert_eq!(config.graphics.app_name, "Sandbox");
        assert_eq!(config.graphics.screen_width, 800);
        assert_eq!(config.graphics.depth_bits, 24);
        assert_eq!(config.runtime.tps, 30.0);
        assert_eq!(config.runtime.channel_capacity, 128);
        assert_eq!(config.assets.search_paths.len(), 2);
        assert_eq!(config.memory.budget_bytes, Some(1024));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let result = EngineConfig::from_toml_str("[graphics\nscreen_width = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn non_positive_tps_is_rejected() {
        let result = EngineConfig::from_toml_str("[runtime]\ntps = 0.0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn tps_without_representable_tick_is_rejected() {
        for tps in [1e-30, f64::INFINITY, f64::NAN, 1e12] {
            let mut config = EngineConfig::default();
            config.runtime.tps = tps;
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "tps {} was accepted",
                tps
            );
        }
    }

    #[test]
    fn tick_duration_follows_tps() {
        let runtime = RuntimeConfig { tps: 50.0, channel_capacity: 1 };
        assert_eq!(runtime.tick_duration().unwrap(), Duration::from_millis(20));
    }

    #[test]
    fn zero_channel_capacity_is_rejected() {
        let result = EngineConfig::from_toml_str("[runtime]\nchannel_capacity = 0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = EngineConfig::load("/definitely/not/here/engine.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    //=====================================================================
    // BuildMode Tests
    //=====================================================================

    #[test]
    fn build_mode_debug_includes_debug_manager() {
        assert!(BuildMode::Debug.includes_debug_manager());
        assert!(!BuildMode::Release.includes_debug_manager());
    }

    #[test]
    fn build_mode_current_follows_debug_assertions() {
        assert_eq!(
            BuildMode::current() == BuildMode::Debug,
            cfg!(debug_assertions)
        );
    }
}
