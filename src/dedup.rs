//! Uniqueness guard over the synthesizer.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::domain::{Language, Question, QuestionKind};
use crate::synth::Synthesizer;
use crate::util::normalize;

pub const MAX_ATTEMPTS: usize = 25;
const ATTEMPT_STRIDE: usize = 7;

/// (type, normalized text). Two questions with equal signatures are duplicates.
pub type Signature = (QuestionKind, String);

pub fn signature(q: &Question) -> Signature {
  (q.kind(), normalize(q.text()))
}

/// Signatures already present in one evaluation. Scoped to a single generation call.
///
/// `variants` remembers the last suffix number handed out per exhausted base
/// signature so the next one is found without rescanning from 1.
#[derive(Debug, Default)]
pub struct UsedSignatures {
  seen: HashSet<Signature>,
  variants: HashMap<Signature, usize>,
}

impl UsedSignatures {
  pub fn new() -> Self {
    Self::default()
  }

  /// False when the signature was already present.
  pub fn insert(&mut self, q: &Question) -> bool {
    self.seen.insert(signature(q))
  }

  fn next_variant(&mut self, base: &Signature) -> usize {
    let n = self.variants.entry(base.clone()).or_insert(0);
    *n += 1;
    *n
  }

  #[cfg(test)]
  pub fn len(&self) -> usize {
    self.seen.len()
  }
}

fn variant_suffix(language: Language, n: usize) -> String {
  let word = match language {
    Language::Es => "variante",
    Language::En => "variant",
  };
  if n <= 1 { format!(" ({})", word) } else { format!(" ({} {})", word, n) }
}

/// Tries `base + attempt*7` for up to 25 attempts and returns the first unused
/// candidate. When every attempt collides the last candidate gets a variant
/// suffix, numbered if the plain suffix is taken too.
pub fn synthesize_unique(
  synth: &Synthesizer,
  kind: QuestionKind,
  base_index: usize,
  used: &mut UsedSignatures,
) -> Question {
  let mut last = None;
  for attempt in 0..MAX_ATTEMPTS {
    let candidate = synth.synthesize(kind, base_index + attempt * ATTEMPT_STRIDE);
    if used.insert(&candidate) {
      return candidate;
    }
    last = Some(candidate);
  }

  let base = last.unwrap_or_else(|| synth.synthesize(kind, base_index));
  let base_sig = signature(&base);
  loop {
    let n = used.next_variant(&base_sig);
    let mut candidate = base.clone();
    candidate.append_to_text(&variant_suffix(synth.language(), n));
    if used.insert(&candidate) {
      warn!(
        target: "evaluation",
        kind = ?kind,
        base_index,
        pool_len = synth.pool_len(kind),
        "Template pool exhausted; accepted question with variant suffix"
      );
      return candidate;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::classify::{ClassificationResult, Domain, Level};

  fn generic() -> Synthesizer {
    Synthesizer::new(ClassificationResult { domain: Domain::Generic, level: Level::new(3) }, "el reciclaje", Language::Es, "t")
  }

  #[test]
  fn signatures_ignore_case_accents_and_padding() {
    let s = generic();
    let mut a = s.synthesize(QuestionKind::TrueFalse, 0);
    let b = a.clone();
    a.set_id("other".into());
    if let Question::TrueFalse(q) = &mut a {
      q.question_text = format!("  {}  ", q.question_text.to_uppercase());
    }
    assert_eq!(signature(&a), signature(&b));
  }

  #[test]
  fn same_text_different_type_is_not_a_duplicate() {
    let s = generic();
    let tf = s.synthesize(QuestionKind::TrueFalse, 0);
    let mut mc = s.synthesize(QuestionKind::MultipleChoice, 0);
    if let Question::MultipleChoice(q) = &mut mc {
      q.question_text = tf.text().to_string();
    }
    assert_ne!(signature(&tf), signature(&mc));
  }

  #[test]
  fn fills_the_whole_pool_without_a_suffix() {
    let s = generic();
    let mut used = UsedSignatures::new();
    let n = s.pool_len(QuestionKind::TrueFalse);
    for i in 0..n {
      let q = synthesize_unique(&s, QuestionKind::TrueFalse, i, &mut used);
      assert!(!q.text().contains("(variante"));
    }
    assert_eq!(used.len(), n);
  }

  #[test]
  fn exhaustion_appends_distinct_numbered_suffixes() {
    let s = generic();
    let mut used = UsedSignatures::new();
    let n = s.pool_len(QuestionKind::MultipleSelection);
    let texts: Vec<String> = (0..2 * n + 1)
      .map(|i| synthesize_unique(&s, QuestionKind::MultipleSelection, i, &mut used).text().to_string())
      .collect();
    let unique: HashSet<&String> = texts.iter().collect();
    assert_eq!(unique.len(), 2 * n + 1);
    assert!(texts[n..2 * n].iter().all(|t| t.ends_with(" (variante)")));
    assert!(texts[2 * n].ends_with(" (variante 2)"));
  }

  #[test]
  fn suffix_numbers_keep_counting_per_base_text() {
    let s = generic();
    let mut used = UsedSignatures::new();
    let n = s.pool_len(QuestionKind::MultipleSelection);
    let rounds = 12;
    let texts: Vec<String> = (0..rounds * n + 1)
      .map(|i| synthesize_unique(&s, QuestionKind::MultipleSelection, i, &mut used).text().to_string())
      .collect();
    let unique: HashSet<&String> = texts.iter().collect();
    assert_eq!(unique.len(), texts.len());
    assert!(texts[(rounds - 1) * n..rounds * n].iter().all(|t| t.ends_with(&format!(" (variante {})", rounds - 1))));
    assert!(texts[rounds * n].ends_with(&format!(" (variante {})", rounds)));
  }

  #[test]
  fn taken_suffix_moves_on_to_the_next_number() {
    let s = generic();
    let mut used = UsedSignatures::new();
    let n = s.pool_len(QuestionKind::MultipleSelection);
    for i in 0..n {
      synthesize_unique(&s, QuestionKind::MultipleSelection, i, &mut used);
    }
    let mut taken = s.synthesize(QuestionKind::MultipleSelection, n + (MAX_ATTEMPTS - 1) * ATTEMPT_STRIDE);
    taken.append_to_text(" (variante)");
    assert!(used.insert(&taken));
    let q = synthesize_unique(&s, QuestionKind::MultipleSelection, n, &mut used);
    assert!(q.text().ends_with(" (variante 2)"));
  }

  #[test]
  fn pre_seeded_signatures_are_skipped() {
    let s = generic();
    let mut used = UsedSignatures::new();
    let first = s.synthesize(QuestionKind::TrueFalse, 0);
    used.insert(&first);
    let q = synthesize_unique(&s, QuestionKind::TrueFalse, 0, &mut used);
    assert_ne!(q.text(), first.text());
  }
}
