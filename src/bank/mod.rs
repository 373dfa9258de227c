//! Static question template bank.
//!
//! Layout: each domain owns a list of level bands; a band covers an inclusive
//! level range and carries TF/MC/MS templates. The pool for (domain, level, type)
//! is every covering band concatenated in declaration order. Lookup falls back to
//! the domain's bands at any level, then to the GENERIC bands for the level.
//! Science topic packs (matched on the normalized topic) come first in the pool.
//! Each domain also carries an English band list used for `Language::En`.
//!
//! Free-response templates live in `free_response` and are resolved separately
//! (math chooses a problem family from the topic).
//!
//! Placeholders: `{topic}` is the trimmed topic, `{Topic}` the same with the
//! first letter upper-cased.

use crate::classify::{Domain, Level};
use crate::domain::{Language, QuestionKind};

#[derive(Debug)]
pub struct TfTemplate {
  pub text: &'static str,
  pub answer: bool,
  pub explanation: &'static str,
}

#[derive(Debug)]
pub struct McTemplate {
  pub text: &'static str,
  pub options: [&'static str; 4],
  pub correct: u8,
  pub explanation: &'static str,
}

#[derive(Debug)]
pub struct MsOption {
  pub text: &'static str,
  pub correct: bool,
}

#[derive(Debug)]
pub struct MsTemplate {
  pub text: &'static str,
  pub options: [MsOption; 4],
  pub explanation: &'static str,
}

/// Heading pair used when rendering a free-response `sampleAnswer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RubricStyle {
  /// "RESPUESTA ESPERADA" + "RÚBRICA DE PUNTAJE" with named tiers.
  Scored,
  /// "RESPUESTA CORRECTA" + "RÚBRICA" with bare percentages.
  Solution,
  /// "RESPUESTA ESPERADA" + "RÚBRICA" with bare percentages.
  Outline,
}

#[derive(Debug)]
pub struct FrTemplate {
  pub prompt: &'static str,
  pub expected: &'static [&'static str],
  /// 100%, 75%, 50%, 25% tiers.
  pub rubric: [&'static str; 4],
  pub style: RubricStyle,
}

#[derive(Debug)]
pub struct Band {
  pub min: u8,
  pub max: u8,
  pub tf: &'static [TfTemplate],
  pub mc: &'static [McTemplate],
  pub ms: &'static [MsTemplate],
}

impl Band {
  fn covers(&self, level: Level) -> bool {
    (self.min..=self.max).contains(&level.get())
  }
}

/// Keyword-selected template set for a well-known topic.
#[derive(Debug)]
pub struct TopicPack {
  pub keywords: &'static [&'static str],
  pub tf: &'static [TfTemplate],
  pub mc: &'static [McTemplate],
  pub ms: &'static [MsTemplate],
}

macro_rules! tf {
  ($text:expr, $answer:expr) => {
    $crate::bank::TfTemplate { text: $text, answer: $answer, explanation: "" }
  };
  ($text:expr, $answer:expr, $explanation:expr) => {
    $crate::bank::TfTemplate { text: $text, answer: $answer, explanation: $explanation }
  };
}

macro_rules! mc {
  ($text:expr, [$a:expr, $b:expr, $c:expr, $d:expr], $correct:expr) => {
    $crate::bank::McTemplate { text: $text, options: [$a, $b, $c, $d], correct: $correct, explanation: "" }
  };
  ($text:expr, [$a:expr, $b:expr, $c:expr, $d:expr], $correct:expr, $explanation:expr) => {
    $crate::bank::McTemplate { text: $text, options: [$a, $b, $c, $d], correct: $correct, explanation: $explanation }
  };
}

macro_rules! ms {
  ($text:expr, [$($opt:expr => $ok:expr),+ $(,)?]) => {
    $crate::bank::MsTemplate {
      text: $text,
      options: [$($crate::bank::MsOption { text: $opt, correct: $ok }),+],
      explanation: "",
    }
  };
  ($text:expr, [$($opt:expr => $ok:expr),+ $(,)?], $explanation:expr) => {
    $crate::bank::MsTemplate {
      text: $text,
      options: [$($crate::bank::MsOption { text: $opt, correct: $ok }),+],
      explanation: $explanation,
    }
  };
}

pub mod free_response;
mod generic;
mod history;
mod language;
mod math;
mod science;

pub use free_response::free_response_pool;

fn bands(domain: Domain, lang: Language) -> &'static [Band] {
  match (domain, lang) {
    (Domain::MathPhysics, Language::Es) => math::BANDS,
    (Domain::MathPhysics, Language::En) => math::BANDS_EN,
    (Domain::Science, Language::Es) => science::BANDS,
    (Domain::Science, Language::En) => science::BANDS_EN,
    (Domain::History, Language::Es) => history::BANDS,
    (Domain::History, Language::En) => history::BANDS_EN,
    (Domain::Language, Language::Es) => language::BANDS,
    (Domain::Language, Language::En) => language::BANDS_EN,
    (Domain::Generic, Language::Es) => generic::BANDS,
    (Domain::Generic, Language::En) => generic::BANDS_EN,
  }
}

fn topic_pack(domain: Domain, lang: Language, topic_norm: &str) -> Option<&'static TopicPack> {
  if domain != Domain::Science || lang != Language::Es {
    return None;
  }
  science::PACKS
    .iter()
    .find(|p| p.keywords.iter().any(|k| topic_norm.contains(k)))
}

/// (domain, level) -> (domain, any level) -> (GENERIC, level) -> (GENERIC, any level).
fn resolve<T: 'static>(
  domain: Domain,
  level: Level,
  lang: Language,
  pick: impl Fn(&'static Band) -> &'static [T],
) -> Vec<&'static T> {
  let collect = |bands: &'static [Band], filter_level: bool| -> Vec<&'static T> {
    bands
      .iter()
      .filter(|b| !filter_level || b.covers(level))
      .flat_map(|b| pick(b).iter())
      .collect()
  };

  let at_level = collect(bands(domain, lang), true);
  if !at_level.is_empty() {
    return at_level;
  }
  let any_level = collect(bands(domain, lang), false);
  if !any_level.is_empty() {
    return any_level;
  }
  let generic = collect(bands(Domain::Generic, lang), true);
  if !generic.is_empty() {
    return generic;
  }
  collect(bands(Domain::Generic, lang), false)
}

/// Template pools for one evaluation, resolved once and then rotated by index.
#[derive(Debug)]
pub struct Pools {
  pub tf: Vec<&'static TfTemplate>,
  pub mc: Vec<&'static McTemplate>,
  pub ms: Vec<&'static MsTemplate>,
  pub fr: Vec<&'static FrTemplate>,
}

impl Pools {
  pub fn resolve(domain: Domain, level: Level, lang: Language, topic_norm: &str) -> Self {
    let pack = topic_pack(domain, lang, topic_norm);

    let mut tf: Vec<&'static TfTemplate> = pack.map(|p| p.tf.iter().collect()).unwrap_or_default();
    tf.extend(resolve(domain, level, lang, |b| b.tf));
    let mut mc: Vec<&'static McTemplate> = pack.map(|p| p.mc.iter().collect()).unwrap_or_default();
    mc.extend(resolve(domain, level, lang, |b| b.mc));
    let mut ms: Vec<&'static MsTemplate> = pack.map(|p| p.ms.iter().collect()).unwrap_or_default();
    ms.extend(resolve(domain, level, lang, |b| b.ms));

    Self { tf, mc, ms, fr: free_response_pool(domain, level, lang, topic_norm) }
  }

  pub fn len(&self, kind: QuestionKind) -> usize {
    match kind {
      QuestionKind::TrueFalse => self.tf.len(),
      QuestionKind::MultipleChoice => self.mc.len(),
      QuestionKind::MultipleSelection => self.ms.len(),
      QuestionKind::FreeResponse => self.fr.len(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::util::normalize;
  use std::collections::HashSet;

  const DOMAINS: [Domain; 5] =
    [Domain::MathPhysics, Domain::Science, Domain::History, Domain::Language, Domain::Generic];

  fn all_bands() -> impl Iterator<Item = &'static Band> {
    DOMAINS
      .iter()
      .flat_map(|d| [Language::Es, Language::En].map(|l| bands(*d, l)))
      .flat_map(|b| b.iter())
  }

  fn all_mc() -> Vec<&'static McTemplate> {
    let mut v: Vec<&'static McTemplate> = all_bands().flat_map(|b| b.mc.iter()).collect();
    v.extend(science::PACKS.iter().flat_map(|p| p.mc.iter()));
    v
  }

  fn all_ms() -> Vec<&'static MsTemplate> {
    let mut v: Vec<&'static MsTemplate> = all_bands().flat_map(|b| b.ms.iter()).collect();
    v.extend(science::PACKS.iter().flat_map(|p| p.ms.iter()));
    v
  }

  #[test]
  fn every_domain_level_and_type_has_templates() {
    for d in DOMAINS {
      for lang in [Language::Es, Language::En] {
        for l in 1..=5 {
          let pools = Pools::resolve(d, Level::new(l), lang, "tema cualquiera");
          for k in QuestionKind::ALL {
            assert!(pools.len(k) > 0, "{:?} {:?} level {} {:?} is empty", d, lang, l, k);
          }
        }
      }
    }
  }

  #[test]
  fn multiple_choice_templates_have_four_distinct_options_and_valid_index() {
    for t in all_mc() {
      assert!(t.correct <= 3, "{}", t.text);
      let set: HashSet<String> = t.options.iter().map(|o| normalize(o)).collect();
      assert_eq!(set.len(), 4, "duplicate options in {}", t.text);
    }
  }

  #[test]
  fn multiple_selection_templates_have_two_or_three_correct() {
    for t in all_ms() {
      let n = t.options.iter().filter(|o| o.correct).count();
      assert!((2..=3).contains(&n), "{} has {} correct", t.text, n);
      let set: HashSet<String> = t.options.iter().map(|o| normalize(o.text)).collect();
      assert_eq!(set.len(), 4, "duplicate options in {}", t.text);
    }
  }

  #[test]
  fn bands_have_sane_ranges() {
    for b in all_bands() {
      assert!(1 <= b.min && b.min <= b.max && b.max <= 5);
    }
  }

  #[test]
  fn history_multiple_selection_falls_back_to_generic() {
    let pools = Pools::resolve(Domain::History, Level::new(3), Language::Es, "la colonia");
    let generic = Pools::resolve(Domain::Generic, Level::new(3), Language::Es, "la colonia");
    assert_eq!(pools.ms.len(), generic.ms.len());
    assert_eq!(pools.ms[0].text, generic.ms[0].text);
  }

  #[test]
  fn math_pool_prefers_level_band_before_shared_word_problems() {
    let l1 = Pools::resolve(Domain::MathPhysics, Level::new(1), Language::Es, "sumas");
    let l3 = Pools::resolve(Domain::MathPhysics, Level::new(3), Language::Es, "fracciones");
    assert_eq!(l1.tf[0].text, "5 + 3 = 8");
    assert_eq!(l3.tf[0].text, "1/2 + 1/4 = 3/4");
    assert!(l3.tf.len() > l1.tf.len());
  }

  #[test]
  fn respiratory_topic_pack_comes_first_for_science() {
    let pools = Pools::resolve(Domain::Science, Level::new(3), Language::Es, &normalize("Sistema Respiratorio"));
    assert!(pools.tf[0].text.contains("pulmones"));
    assert!(pools.mc.len() >= 10);
    assert!(pools.ms.len() >= 5);
  }

  #[test]
  fn english_pools_skip_spanish_topic_packs() {
    let pools = Pools::resolve(Domain::Science, Level::new(3), Language::En, &normalize("sistema respiratorio"));
    assert_eq!(pools.tf[0].text, "{Topic} is a fundamental process that takes place in living things.");
    assert!(pools.tf.iter().all(|t| !t.text.contains("pulmones")));
  }

  #[test]
  fn classic_topic_statements_lead_each_pool() {
    let history = Pools::resolve(Domain::History, Level::new(2), Language::Es, "la colonia");
    assert_eq!(history.tf[0].text, "Los eventos relacionados con {topic} tuvieron impacto en la sociedad de su época.");
    assert!(history.tf.len() >= 16);

    let science = Pools::resolve(Domain::Science, Level::new(4), Language::Es, "los volcanes");
    assert_eq!(science.tf[0].text, "{Topic} es un proceso fundamental que ocurre en todos los seres vivos.");
    assert_eq!(science.mc[1].options[science.mc[1].correct as usize], "Método científico");

    let generic = Pools::resolve(Domain::Generic, Level::new(3), Language::Es, "el reciclaje");
    assert_eq!(generic.tf[7].text, "El dominio de {topic} se logra únicamente memorizando definiciones.");
    assert!(!generic.tf[7].answer);
    assert_eq!(generic.mc[3].options[1], "Pensamiento crítico");
    assert_eq!(generic.ms[0].text, "Selecciona todas las afirmaciones correctas sobre {topic}:");
    assert_eq!(generic.ms.len(), 6);
  }
}
