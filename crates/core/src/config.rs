//! Engine configuration
//!
//! Defaults match the shipped levels. Every field can be overridden from the
//! environment:
//!
//! - `SLIDEBOX_BOARD_SIZE`: board side for levels that do not declare one (default 14)
//! - `SLIDEBOX_SEED`: seed for color assignment (default 1)
//! - `SLIDEBOX_PALETTE`: comma separated color names (default: all colors)

use crate::error::ConfigError;
use crate::palette::Palette;
use crate::types::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub board_size: u8,
    pub palette: Palette,
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            palette: Palette::full(),
            seed: 1,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables, keeping defaults for anything unset
    /// or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let board_size = match lookup("SLIDEBOX_BOARD_SIZE") {
            Some(raw) => match raw.trim().parse::<u8>() {
                Ok(size) if (1..=MAX_BOARD_SIZE).contains(&size) => size,
                _ => {
                    tracing::warn!(value = %raw, "ignoring invalid SLIDEBOX_BOARD_SIZE");
                    defaults.board_size
                }
            },
            None => defaults.board_size,
        };

        let seed = match lookup("SLIDEBOX_SEED") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "ignoring invalid SLIDEBOX_SEED");
                defaults.seed
            }),
            None => defaults.seed,
        };

        let palette = match lookup("SLIDEBOX_PALETTE") {
            Some(raw) => Palette::parse(&raw).unwrap_or_else(|err| {
                tracing::warn!(value = %raw, %err, "ignoring invalid SLIDEBOX_PALETTE");
                defaults.palette.clone()
            }),
            None => defaults.palette.clone(),
        };

        Self {
            board_size,
            palette,
            seed,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_board_size(mut self, board_size: u8) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_board_size(self.board_size)?;
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}

pub(crate) fn validate_board_size(size: u8) -> Result<(), ConfigError> {
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(ConfigError::BoardSize(size));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.board_size, 14);
        assert_eq!(config.seed, 1);
        assert_eq!(config.palette, Palette::full());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("SLIDEBOX_BOARD_SIZE", "9"),
            ("SLIDEBOX_SEED", "77"),
            ("SLIDEBOX_PALETTE", "red,blue"),
        ]));
        assert_eq!(config.board_size, 9);
        assert_eq!(config.seed, 77);
        assert_eq!(config.palette.colors(), &[Color::Red, Color::Blue]);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("SLIDEBOX_BOARD_SIZE", "0"),
            ("SLIDEBOX_SEED", "lots"),
            ("SLIDEBOX_PALETTE", "red,red"),
        ]));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_validate_board_size() {
        assert_eq!(
            EngineConfig::default().with_board_size(0).validate(),
            Err(ConfigError::BoardSize(0))
        );
        assert_eq!(
            EngineConfig::default().with_board_size(65).validate(),
            Err(ConfigError::BoardSize(65))
        );
        assert!(EngineConfig::default().with_board_size(64).validate().is_ok());
    }
}
