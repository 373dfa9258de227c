//! Level & domain classification from free-text topic/subject/course strings.
//!
//! Pure and total: unmatched input falls back to `Domain::Generic` and level 3.
//! Domain checks run in a fixed order and the first match wins, so a topic that
//! mentions both "historia" and "matemática" lands in `MathPhysics`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::util::normalize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Domain {
  MathPhysics,
  Science,
  History,
  Language,
  Generic,
}

/// Grade band 1..=5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
  pub const DEFAULT: Level = Level(3);

  /// Clamps into 1..=5.
  pub fn new(n: u8) -> Self {
    Level(n.clamp(1, 5))
  }

  pub fn get(self) -> u8 {
    self.0
  }
}

impl Default for Level {
  fn default() -> Self {
    Level::DEFAULT
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
  pub level: Level,
  pub domain: Domain,
}

fn compile<T: Copy>(rules: &[(T, &str)]) -> Vec<(T, Regex)> {
  rules
    .iter()
    .filter_map(|(tag, pattern)| match Regex::new(pattern) {
      Ok(rx) => Some((*tag, rx)),
      Err(e) => {
        error!(target: "evaluation", %pattern, error = %e, "Dropping invalid classifier regex");
        None
      }
    })
    .collect()
}

// Keyword vocabularies run on normalized (accent-free, lowercase) text.
// Keep in sync with the template bank under `crate::bank`.
static DOMAIN_RULES: Lazy<Vec<(Domain, Regex)>> = Lazy::new(|| {
  compile(&[
    (
      Domain::MathPhysics,
      concat!(
        r"matem|math|algebra|geometr|aritmet|calculo|ecuacion|fraccion|decimal|porcentaje|trigonometr",
        r"|sumas?|restas?|multiplic|divisi|numero",
        r"|fisica|physics|mecanica|cinetica|dinamica|fuerza|velocidad|aceleracion|energia|trabajo|potencia",
      ),
    ),
    (
      Domain::Science,
      r"ciencia|science|biolog|quimic|chemistr|naturaleza|ambiente|ecolog|ecosistema|sistema|celula|planeta|fotosintesis",
    ),
    (
      Domain::History,
      r"historia|history|geografi|geograph|social|civica|ciudadan|gobierno|pais|cultura|civilizaci",
    ),
    (
      Domain::Language,
      r"lenguaje|language|literatura|literature|espanol|gramatica|grammar|ortografi|lectura|reading|escritura|writing|comunicaci",
    ),
  ])
});

static LEVEL_RULES: Lazy<Vec<(u8, Regex)>> = Lazy::new(|| {
  compile(&[
    (1u8, r"\b1\s*(?:r[oa]|°|º)?\s*basic|\b2\s*(?:d[oa]|°|º)?\s*basic|primero\s*b|segundo\s*b"),
    (2, r"\b3\s*(?:r[oa]|°|º)?\s*basic|\b4\s*(?:t[oa]|°|º)?\s*basic|tercero\s*b|cuarto\s*b"),
    (3, r"\b5\s*(?:t[oa]|°|º)?\s*basic|\b6\s*(?:t[oa]|°|º)?\s*basic|quinto\s*b|sexto\s*b"),
    (4, r"\b7\s*(?:m[oa]|°|º)?\s*basic|\b8\s*(?:v[oa]|°|º)?\s*basic|septimo|octavo"),
    (5, r"\b[1-4]\s*(?:r[oa]|d[oa]|t[oa]|°|º)?\s*medi|primero\s*m|segundo\s*m|tercero\s*m|cuarto\s*m"),
  ])
});

/// Domain from topic + subject text.
pub fn classify_domain(topic: &str, subject: &str) -> Domain {
  let text = normalize(&format!("{} {}", topic, subject));
  DOMAIN_RULES
    .iter()
    .find(|(_, rx)| rx.is_match(&text))
    .map(|(d, _)| *d)
    .unwrap_or(Domain::Generic)
}

/// Level from the course label; 3 when nothing matches.
pub fn classify_level(course: &str) -> Level {
  let text = normalize(course);
  if text.is_empty() {
    return Level::DEFAULT;
  }
  LEVEL_RULES
    .iter()
    .find(|(_, rx)| rx.is_match(&text))
    .map(|(n, _)| Level::new(*n))
    .unwrap_or(Level::DEFAULT)
}

#[instrument(level = "debug", skip_all, fields(topic_len = topic.len(), subject_len = subject.len(), %course))]
pub fn classify(topic: &str, subject: &str, course: &str) -> ClassificationResult {
  let result = ClassificationResult { level: classify_level(course), domain: classify_domain(topic, subject) };
  debug!(target: "evaluation", domain = ?result.domain, level = result.level.get(), "Classified request");
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fractions_in_fifth_grade_are_math_level_three_every_time() {
    let a = classify("fracciones", "Matemáticas", "5to Básico");
    let b = classify("fracciones", "Matemáticas", "5to Básico");
    assert_eq!(a, ClassificationResult { domain: Domain::MathPhysics, level: Level::new(3) });
    assert_eq!(a, b);
  }

  #[test]
  fn respiratory_system_is_science() {
    let r = classify("sistema respiratorio", "Ciencias Naturales", "5to Básico");
    assert_eq!(r.domain, Domain::Science);
    assert_eq!(r.level.get(), 3);
  }

  #[test]
  fn domain_order_makes_math_win_over_history() {
    assert_eq!(classify_domain("historia de la matemática", ""), Domain::MathPhysics);
    assert_eq!(classify_domain("Revolución Francesa", "Historia"), Domain::History);
    assert_eq!(classify_domain("el cuento", "Lenguaje y Comunicación"), Domain::Language);
    assert_eq!(classify_domain("la amistad", "Orientación"), Domain::Generic);
  }

  #[test]
  fn physics_keywords_map_to_math_physics() {
    assert_eq!(classify_domain("leyes de Newton", "Física"), Domain::MathPhysics);
    assert_eq!(classify_domain("mecánica clásica", ""), Domain::MathPhysics);
  }

  #[test]
  fn level_bands_cover_basic_and_medio_grades() {
    assert_eq!(classify_level("1ro Básico").get(), 1);
    assert_eq!(classify_level("2do basico A").get(), 1);
    assert_eq!(classify_level("Segundo Básico").get(), 1);
    assert_eq!(classify_level("4to Básico").get(), 2);
    assert_eq!(classify_level("6to Básico B").get(), 3);
    assert_eq!(classify_level("8vo Básico").get(), 4);
    assert_eq!(classify_level("Séptimo").get(), 4);
    assert_eq!(classify_level("1ro Medio").get(), 5);
    assert_eq!(classify_level("3° Medio").get(), 5);
    assert_eq!(classify_level("Cuarto Medio").get(), 5);
  }

  #[test]
  fn every_rule_compiles() {
    assert_eq!(DOMAIN_RULES.len(), 4);
    assert_eq!(LEVEL_RULES.len(), 5);
  }

  #[test]
  fn unknown_or_empty_course_defaults_to_level_three() {
    assert_eq!(classify_level(""), Level::DEFAULT);
    assert_eq!(classify_level("Kinder"), Level::DEFAULT);
  }
}
