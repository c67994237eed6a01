use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::error::{GameError, GameResult};

/// Runtime options for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for scared-ghost choices; drawn from the OS when unset
    pub seed: Option<u64>,
    /// Level the game starts on (1-based)
    pub start_level: u32,
    /// Lives at the start of the game, including the one in play
    pub lives: u8,
    /// Steer the player with the built-in autopilot
    pub attract_mode: bool,
    /// Stop the runner after this many frames
    pub max_frames: Option<u64>,
    /// Pace the runner at 60 frames per second instead of running flat out
    pub realtime: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            start_level: 1,
            lives: 3,
            attract_mode: true,
            max_frames: None,
            realtime: false,
        }
    }
}

impl Config {
    /// Rejects values the simulation cannot start from.
    pub fn validate(&self) -> GameResult<()> {
        if self.start_level == 0 {
            return Err(GameError::Config("start_level must be at least 1".into()));
        }
        if self.lives == 0 {
            return Err(GameError::Config("lives must be at least 1".into()));
        }
        Ok(())
    }
}

/// Loads the configuration from `PACMAN_*` environment variables, falling back to defaults.
pub fn load_config() -> GameResult<Config> {
    let config: Config = Figment::new()
        .merge(Env::prefixed("PACMAN_"))
        .extract()
        .map_err(|e| GameError::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_lives_rejected() {
        let config = Config {
            lives: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(GameError::Config(_))));
    }

    #[test]
    fn test_env_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PACMAN_SEED", "42");
            jail.set_env("PACMAN_START_LEVEL", "3");
            jail.set_env("PACMAN_ATTRACT_MODE", "false");

            let config = load_config().map_err(|e| e.to_string())?;
            assert_eq!(config.seed, Some(42));
            assert_eq!(config.start_level, 3);
            assert!(!config.attract_mode);
            assert_eq!(config.lives, 3);
            Ok(())
        });
    }
}
