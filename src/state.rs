//! Application state: generation settings, prompts and the optional AI capabilities.
//!
//! Nothing here is mutable after startup. Every request builds its own
//! classifier/synthesizer/dedup state; only the static template bank and
//! these read-only handles are shared.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ai::{TextCompletion, VisionExtraction};
use crate::config::{load_agent_config_from_env, GenerationSettings};
use crate::openai::{OpenAiClient, DEFAULT_MODEL, DEFAULT_VISION_MODEL, MIN_ACTIVE_KEY_LEN};
use crate::prompts::Prompts;

/// What `/ai/status` reports; captured once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiStatus {
    pub provider: String,
    pub model: String,
    pub vision_model: String,
    pub is_active: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub settings: GenerationSettings,
    pub prompts: Prompts,
    pub text: Option<Arc<dyn TextCompletion>>,
    pub vision: Option<Arc<dyn VisionExtraction>>,
    pub ai_status: AiStatus,
}

impl AppState {
    /// Build state from env: load TOML config, then construct the OpenAI-compatible client.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_agent_config_from_env().unwrap_or_default();

        match OpenAiClient::from_env() {
            Ok(client) => {
                let status = AiStatus {
                    provider: provider_label(&client.base_url),
                    model: client.model.clone(),
                    vision_model: client.vision_model.clone(),
                    is_active: client.key_len() >= MIN_ACTIVE_KEY_LEN,
                };
                info!(target: "evaluacion_backend", base_url = %client.base_url, model = %client.model, vision_model = %client.vision_model, active = status.is_active, "AI capability enabled.");
                let client = Arc::new(client);
                let text: Arc<dyn TextCompletion> = client.clone();
                let vision: Arc<dyn VisionExtraction> = client;
                Self {
                    settings: cfg.generation,
                    prompts: cfg.prompts,
                    text: Some(text),
                    vision: Some(vision),
                    ai_status: status,
                }
            }
            Err(e) => {
                warn!(target: "evaluacion_backend", error = %e, "AI capability disabled. Using local template bank only.");
                Self::with_capabilities(cfg.generation, cfg.prompts, None, None)
            }
        }
    }

    /// Assemble state from explicit parts (fakes in tests, or no AI at all).
    pub fn with_capabilities(
        settings: GenerationSettings,
        prompts: Prompts,
        text: Option<Arc<dyn TextCompletion>>,
        vision: Option<Arc<dyn VisionExtraction>>,
    ) -> Self {
        let ai_status = AiStatus {
            provider: "none".into(),
            model: text.as_ref().map(|t| t.model().to_string()).unwrap_or_else(|| DEFAULT_MODEL.into()),
            vision_model: vision.as_ref().map(|v| v.model().to_string()).unwrap_or_else(|| DEFAULT_VISION_MODEL.into()),
            is_active: text.is_some(),
        };
        Self { settings, prompts, text, vision, ai_status }
    }

    pub fn text_ai(&self) -> Option<&dyn TextCompletion> {
        self.text.as_deref()
    }

    pub fn vision_ai(&self) -> Option<&dyn VisionExtraction> {
        self.vision.as_deref()
    }
}

fn provider_label(base_url: &str) -> String {
    if base_url.contains("openrouter.ai") {
        "openrouter".into()
    } else if base_url.contains("api.openai.com") {
        "openai".into()
    } else {
        "openai-compatible".into()
    }
}
