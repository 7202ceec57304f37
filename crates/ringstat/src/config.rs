use crate::color::{HexColor, Palette, TRANSPARENT_WHITE};
use crate::render::{RenderMode, RingStyle};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

fn default_stroke_width() -> f64 {
    5.0
}

fn default_text_size() -> f64 {
    20.0
}

fn default_background() -> HexColor {
    HexColor::from(TRANSPARENT_WHITE)
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_text_size")]
    pub text_size: f64,
    #[serde(default)]
    pub colors: Vec<HexColor>,
    #[serde(default = "default_background")]
    pub background: HexColor,
    #[serde(default)]
    pub render_mode: RenderMode,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
            text_size: default_text_size(),
            colors: Vec::new(),
            background: default_background(),
            render_mode: RenderMode::default(),
        }
    }
}

impl StatsConfig {
    pub fn palette(&self) -> Palette {
        Palette::new(self.colors.iter().map(|c| **c))
    }

    pub fn style(&self) -> RingStyle {
        RingStyle {
            stroke_width: self.stroke_width,
            text_size: self.text_size,
            background: *self.background,
            ..RingStyle::default()
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "ringstat", "ringstat").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<StatsConfig, ConfigError> {
    load_config_from(&get_config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<StatsConfig, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("RINGSTAT"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn from_toml_str(toml: &str) -> Result<StatsConfig, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads the config, falling back to defaults when it is missing or broken.
pub fn load_or_default(path: Option<&Path>) -> StatsConfig {
    let result = match path {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    match result {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            StatsConfig::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
