//! Loading game configuration (extra pool characters) from TOML.
//!
//! Expected schema:
//!
//! ```toml
//! [[characters]]
//! name = "Astronaut"
//! glyph = "🧑‍🚀"
//! ```

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct GameConfig {
  #[serde(default)]
  pub characters: Vec<CharacterCfg>,
}

/// Character entry accepted in TOML configuration. Entries with an empty
/// name or glyph are skipped at load time.
#[derive(Clone, Debug, Deserialize)]
pub struct CharacterCfg {
  pub name: String,
  pub glyph: String,
}

/// Attempt to load `GameConfig` from PUZZLE_CONFIG_PATH. On any parsing/IO
/// error, returns None and the built-in pool is used alone.
pub fn load_game_config_from_env() -> Option<GameConfig> {
  let path = std::env::var("PUZZLE_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<GameConfig>(&s) {
      Ok(cfg) => {
        info!(target: "helperville_backend", %path, "Loaded game config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "helperville_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "helperville_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
