use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub hints: HintsConfig,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
    #[serde(default = "default_grid_opacity")]
    pub grid_opacity: f32,
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
}

#[derive(Debug, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_levels_path")]
    pub levels_path: String,
    #[serde(default = "default_scores_path")]
    pub scores_path: String,
}

#[derive(Debug, Deserialize)]
pub struct HintsConfig {
    /// Escape paths shorter than this are not worth drawing
    #[serde(default = "default_min_hint_len")]
    pub min_path_len: usize,
}

// Default values
fn default_bg_r() -> u8 { 20 }
fn default_bg_g() -> u8 { 46 }
fn default_bg_b() -> u8 { 71 }
fn default_grid_opacity() -> f32 { 0.15 }
fn default_tile_size() -> f32 { 50.0 }
fn default_levels_path() -> String { "levels.json".to_string() }
fn default_scores_path() -> String { "scores.json".to_string() }
fn default_min_hint_len() -> usize { 3 }

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
            grid_opacity: default_grid_opacity(),
            tile_size: default_tile_size(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            levels_path: default_levels_path(),
            scores_path: default_scores_path(),
        }
    }
}

impl Default for HintsConfig {
    fn default() -> Self {
        Self {
            min_path_len: default_min_hint_len(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visual: VisualConfig::default(),
            files: FilesConfig::default(),
            hints: HintsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from config.toml");
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}
