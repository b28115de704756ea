use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::packing::config::{
    DEFAULT_CIRCLE_DIAMETER, DEFAULT_OPTIMAL_COUNT, DEFAULT_SQUARE_SIDE,
};
use crate::packing::{EngineSettings, LoaderOptions, PackingConfig};

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on values that do not parse
/// or describe an impossible geometry.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub coords_106_file: PathBuf,
    pub optimal_expected_count: usize,
    pub square_side: f64,
    pub circle_diameter: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            coords_106_file: std::env::var("COORDS_106_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data").join("coords_106.txt")),
            optimal_expected_count: parse_env("OPTIMAL_EXPECTED_COUNT", DEFAULT_OPTIMAL_COUNT)?,
            square_side: parse_env("SQUARE_SIDE", DEFAULT_SQUARE_SIDE)?,
            circle_diameter: parse_env("CIRCLE_DIAMETER", DEFAULT_CIRCLE_DIAMETER)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.square_side.is_finite() || self.square_side <= 0.0 {
            bail!("SQUARE_SIDE must be a positive number, got {}", self.square_side);
        }
        if !self.circle_diameter.is_finite() || self.circle_diameter <= 0.0 {
            bail!(
                "CIRCLE_DIAMETER must be a positive number, got {}",
                self.circle_diameter
            );
        }
        if self.circle_diameter > self.square_side {
            bail!(
                "CIRCLE_DIAMETER ({}) must not exceed SQUARE_SIDE ({})",
                self.circle_diameter,
                self.square_side
            );
        }
        Ok(())
    }

    pub fn packing_config(&self) -> PackingConfig {
        PackingConfig::new(self.square_side, self.circle_diameter)
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            config: self.packing_config(),
            optimal_path: self.coords_106_file.clone(),
            loader: LoaderOptions {
                expected_count: self.optimal_expected_count,
            },
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}
