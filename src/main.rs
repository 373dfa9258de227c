//! Evaluación · Evaluation Generation & OMR Backend
//!
//! - Axum HTTP API
//! - Deterministic local template bank, optionally enriched by an OpenAI-compatible model
//! - Vision-based OMR extraction of scanned answer sheets
//!
//! Important env variables:
//!   PORT                     : u16 (default 3000)
//!   OPENROUTER_API_KEY       : enables the AI capability if present (OPENAI_API_KEY also read)
//!   OPENROUTER_BASE_URL      : default "https://openrouter.ai/api/v1" (OPENAI_BASE_URL also read)
//!   OPENROUTER_MODEL         : default "openai/gpt-4o-mini"
//!   OPENROUTER_VISION_MODEL  : default "google/gemini-2.0-flash-exp:free"
//!   OPENROUTER_SITE_URL      : HTTP-Referer header
//!   OPENROUTER_APP_NAME      : X-Title header
//!   AGENT_CONFIG_PATH        : path to TOML config (generation knobs + prompt overrides)
//!   LOG_LEVEL                : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT               : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod classify;
mod bank;
mod synth;
mod dedup;
mod splice;
mod assembler;
mod ai;
mod openai;
mod omr;
mod error;
mod config;
mod prompts;
mod seeds;
mod state;
mod protocol;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Build shared application state (settings, prompts, optional AI capabilities).
  let state = Arc::new(AppState::new());

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "evaluacion_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "evaluacion_backend", error = %e, "Failed to listen for ctrl-c");
    return std::future::pending().await;
  }
  info!(target: "evaluacion_backend", "Shutdown signal received");
}
