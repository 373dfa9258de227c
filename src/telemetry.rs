//! Tracing subscriber setup.
//!
//! `LOG_LEVEL` takes a plain level or full directives and falls back to
//! `DEFAULT_FILTER`. `LOG_FORMAT=json` switches to structured output.
//!
//! Targets: `evaluation` for classification, synthesis, splicing and assembly;
//! `omr` for vision extraction; `evaluacion_backend` for startup and the AI client.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,evaluation=debug,omr=debug,evaluacion_backend=debug,tower_http=info,axum=info";

fn filter_from(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init_tracing() {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_from("LOG_LEVEL"))
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn unset_variable_falls_back_to_default_filter() {
        let filter = filter_from("EVALUACION_TEST_UNSET_LOG_LEVEL");
        assert_eq!(filter.to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
    }
}
