//! Loading agent configuration (generation knobs + prompt overrides) from TOML.
//!
//! ```toml
//! [generation]
//! ai_timeout_secs = 45
//! temperature = 0.7
//! max_tokens = 4000
//! strict_ai_count = true
//!
//! [prompts]
//! math_es = "..."
//! ```

use serde::Deserialize;
use tracing::{error, info};

use crate::ai::CompletionOptions;
use crate::prompts::Prompts;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AgentConfig {
  #[serde(default)]
  pub generation: GenerationSettings,
  #[serde(default)]
  pub prompts: Prompts,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationSettings {
  pub ai_timeout_secs: u64,
  pub temperature: f32,
  pub max_tokens: u32,
  /// A response whose item count differs from the requested TF+MC+MS total
  /// is discarded as a whole.
  pub strict_ai_count: bool,
}

impl Default for GenerationSettings {
  fn default() -> Self {
    Self { ai_timeout_secs: 45, temperature: 0.7, max_tokens: 4000, strict_ai_count: true }
  }
}

impl GenerationSettings {
  pub fn completion_options(&self) -> CompletionOptions {
    CompletionOptions { temperature: self.temperature, max_tokens: self.max_tokens, json_mode: true }
  }
}

/// Parse a TOML document; `None` (logged) on syntax or schema errors.
pub fn parse_agent_config(src: &str, origin: &str) -> Option<AgentConfig> {
  match toml::from_str::<AgentConfig>(src) {
    Ok(cfg) => {
      info!(target: "evaluacion_backend", path = %origin, strict_ai_count = cfg.generation.strict_ai_count, "Loaded agent config (TOML)");
      Some(cfg)
    }
    Err(e) => {
      error!(target: "evaluacion_backend", path = %origin, error = %e, "Failed to parse TOML config");
      None
    }
  }
}

/// Attempt to load `AgentConfig` from AGENT_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_agent_config_from_env() -> Option<AgentConfig> {
  let path = std::env::var("AGENT_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => parse_agent_config(&s, &path),
    Err(e) => {
      error!(target: "evaluacion_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_document_yields_defaults() {
    let cfg = parse_agent_config("", "inline").unwrap();
    assert_eq!(cfg.generation, GenerationSettings::default());
    assert_eq!(cfg.generation.ai_timeout_secs, 45);
    assert!(cfg.generation.strict_ai_count);
  }

  #[test]
  fn partial_generation_table_keeps_other_defaults() {
    let cfg = parse_agent_config("[generation]\nstrict_ai_count = false\nmax_tokens = 2000\n", "inline").unwrap();
    assert!(!cfg.generation.strict_ai_count);
    assert_eq!(cfg.generation.max_tokens, 2000);
    assert_eq!(cfg.generation.temperature, 0.7);
    let opts = cfg.generation.completion_options();
    assert!(opts.json_mode);
    assert_eq!(opts.max_tokens, 2000);
  }

  #[test]
  fn prompt_overrides_are_read() {
    let cfg = parse_agent_config("[prompts]\ngeneral_en = \"About {topic}\"\n", "inline").unwrap();
    assert_eq!(cfg.prompts.general_en, "About {topic}");
  }

  #[test]
  fn malformed_toml_is_rejected() {
    assert!(parse_agent_config("[generation\nmax_tokens = ", "inline").is_none());
    assert!(parse_agent_config("[generation]\nmax_tokens = \"many\"\n", "inline").is_none());
  }
}
