//! Domain models: question variants, evaluations, requested counts and language.

use serde::{Deserialize, Serialize};

/// Locale of the generated content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  #[default]
  Es,
  En,
}

impl Language {
  /// Lenient parse for request payloads ("es", "ES", "es-CL", "en-US"...).
  pub fn from_tag(tag: &str) -> Self {
    if tag.trim().to_ascii_lowercase().starts_with("en") { Language::En } else { Language::Es }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Language::Es => "es",
      Language::En => "en",
    }
  }

  pub fn title_prefix(self) -> &'static str {
    match self {
      Language::Es => "EVALUACIÓN",
      Language::En => "EVALUATION",
    }
  }
}

/// Question type without payload. Ordering of variants is the output ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
  TrueFalse,
  MultipleChoice,
  MultipleSelection,
  FreeResponse,
}

impl QuestionKind {
  pub const ALL: [QuestionKind; 4] = [
    QuestionKind::TrueFalse,
    QuestionKind::MultipleChoice,
    QuestionKind::MultipleSelection,
    QuestionKind::FreeResponse,
  ];

  /// Short tag used in question ids.
  pub fn short(self) -> &'static str {
    match self {
      QuestionKind::TrueFalse => "tf",
      QuestionKind::MultipleChoice => "mc",
      QuestionKind::MultipleSelection => "ms",
      QuestionKind::FreeResponse => "des",
    }
  }

  /// Accepts both the canonical tags and the short ones.
  pub fn from_tag(tag: &str) -> Option<Self> {
    match tag.trim().to_ascii_uppercase().as_str() {
      "TRUE_FALSE" | "TF" => Some(QuestionKind::TrueFalse),
      "MULTIPLE_CHOICE" | "MC" => Some(QuestionKind::MultipleChoice),
      "MULTIPLE_SELECTION" | "MS" => Some(QuestionKind::MultipleSelection),
      "FREE_RESPONSE" | "DES" => Some(QuestionKind::FreeResponse),
      _ => None,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrueFalseQuestion {
  pub id: String,
  pub question_text: String,
  pub correct_answer: bool,
  #[serde(default)]
  pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceQuestion {
  pub id: String,
  pub question_text: String,
  pub options: [String; 4],
  pub correct_answer_index: u8,
  #[serde(default)]
  pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleSelectionQuestion {
  pub id: String,
  pub question_text: String,
  pub options: [String; 4],
  /// Sorted ascending, 2 or 3 entries, each in 0..=3.
  pub correct_answer_indices: Vec<u8>,
  #[serde(default)]
  pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeResponseQuestion {
  pub id: String,
  pub prompt: String,
  pub sample_answer: String,
  #[serde(default)]
  pub explanation: String,
}

/// A question, discriminated on the wire by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Question {
  TrueFalse(TrueFalseQuestion),
  MultipleChoice(MultipleChoiceQuestion),
  MultipleSelection(MultipleSelectionQuestion),
  FreeResponse(FreeResponseQuestion),
}

impl Question {
  pub fn kind(&self) -> QuestionKind {
    match self {
      Question::TrueFalse(_) => QuestionKind::TrueFalse,
      Question::MultipleChoice(_) => QuestionKind::MultipleChoice,
      Question::MultipleSelection(_) => QuestionKind::MultipleSelection,
      Question::FreeResponse(_) => QuestionKind::FreeResponse,
    }
  }

  pub fn id(&self) -> &str {
    match self {
      Question::TrueFalse(q) => &q.id,
      Question::MultipleChoice(q) => &q.id,
      Question::MultipleSelection(q) => &q.id,
      Question::FreeResponse(q) => &q.id,
    }
  }

  pub fn set_id(&mut self, id: String) {
    match self {
      Question::TrueFalse(q) => q.id = id,
      Question::MultipleChoice(q) => q.id = id,
      Question::MultipleSelection(q) => q.id = id,
      Question::FreeResponse(q) => q.id = id,
    }
  }

  /// `questionText`, or `prompt` for free-response.
  pub fn text(&self) -> &str {
    match self {
      Question::TrueFalse(q) => &q.question_text,
      Question::MultipleChoice(q) => &q.question_text,
      Question::MultipleSelection(q) => &q.question_text,
      Question::FreeResponse(q) => &q.prompt,
    }
  }

  pub fn append_to_text(&mut self, suffix: &str) {
    match self {
      Question::TrueFalse(q) => q.question_text.push_str(suffix),
      Question::MultipleChoice(q) => q.question_text.push_str(suffix),
      Question::MultipleSelection(q) => q.question_text.push_str(suffix),
      Question::FreeResponse(q) => q.prompt.push_str(suffix),
    }
  }

  /// Structural checks every emitted question must pass.
  pub fn check_structure(&self) -> Result<(), String> {
    if self.text().trim().is_empty() {
      return Err("empty question text".into());
    }
    match self {
      Question::TrueFalse(_) => Ok(()),
      Question::MultipleChoice(q) => {
        check_options(&q.options)?;
        if q.correct_answer_index > 3 {
          return Err(format!("correctAnswerIndex {} out of range", q.correct_answer_index));
        }
        Ok(())
      }
      Question::MultipleSelection(q) => {
        check_options(&q.options)?;
        let n = q.correct_answer_indices.len();
        if !(2..=3).contains(&n) {
          return Err(format!("{} correct indices, expected 2 or 3", n));
        }
        if q.correct_answer_indices.iter().any(|i| *i > 3) {
          return Err("correct index out of range".into());
        }
        if q.correct_answer_indices.windows(2).any(|w| w[0] >= w[1]) {
          return Err("correct indices not strictly ascending".into());
        }
        Ok(())
      }
      Question::FreeResponse(q) => {
        if q.sample_answer.trim().is_empty() { Err("empty sample answer".into()) } else { Ok(()) }
      }
    }
  }
}

fn check_options(options: &[String; 4]) -> Result<(), String> {
  if options.iter().any(|o| o.trim().is_empty()) {
    return Err("empty option".into());
  }
  for i in 0..4 {
    for j in (i + 1)..4 {
      if crate::util::normalize(&options[i]) == crate::util::normalize(&options[j]) {
        return Err(format!("duplicate options at {} and {}", i, j));
      }
    }
  }
  Ok(())
}

/// Generated evaluation value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
  pub evaluation_title: String,
  pub questions: Vec<Question>,
}

/// Requested number of questions per type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCounts {
  #[serde(default)] pub tf: usize,
  #[serde(default)] pub mc: usize,
  #[serde(default)] pub ms: usize,
  #[serde(default)] pub des: usize,
}

impl QuestionCounts {
  pub fn new(tf: usize, mc: usize, ms: usize, des: usize) -> Self {
    Self { tf, mc, ms, des }
  }

  /// Even split of `n` questions over TF/MC/MS (rounding half up).
  pub fn from_total(n: usize) -> Self {
    let tf = (2 * n + 3) / 6;
    let rest = n - tf;
    let mc = (rest + 1) / 2;
    Self { tf, mc, ms: rest - mc, des: 0 }
  }

  pub fn get(&self, kind: QuestionKind) -> usize {
    match kind {
      QuestionKind::TrueFalse => self.tf,
      QuestionKind::MultipleChoice => self.mc,
      QuestionKind::MultipleSelection => self.ms,
      QuestionKind::FreeResponse => self.des,
    }
  }

  pub fn total(&self) -> usize {
    self.tf + self.mc + self.ms + self.des
  }

  /// Number of items the AI is asked for (free-response stays local).
  pub fn ai_total(&self) -> usize {
    self.tf + self.mc + self.ms
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn question_serializes_with_type_tag_and_camel_case_fields() {
    let q = Question::MultipleChoice(MultipleChoiceQuestion {
      id: "mc_1".into(),
      question_text: "¿Cuánto es 5 + 4?".into(),
      options: ["7".into(), "8".into(), "9".into(), "10".into()],
      correct_answer_index: 2,
      explanation: String::new(),
    });
    let v = serde_json::to_value(&q).unwrap();
    assert_eq!(v["type"], "MULTIPLE_CHOICE");
    assert_eq!(v["questionText"], "¿Cuánto es 5 + 4?");
    assert_eq!(v["correctAnswerIndex"], 2);
    assert_eq!(v["options"].as_array().unwrap().len(), 4);
  }

  #[test]
  fn free_response_round_trips_through_json() {
    let v = json!({"type": "FREE_RESPONSE", "id": "d", "prompt": "Explica", "sampleAnswer": "x"});
    let q: Question = serde_json::from_value(v).unwrap();
    assert_eq!(q.kind(), QuestionKind::FreeResponse);
    assert_eq!(q.text(), "Explica");
  }

  #[test]
  fn structure_check_rejects_duplicate_options_and_bad_cardinality() {
    let mc = Question::MultipleChoice(MultipleChoiceQuestion {
      id: "a".into(),
      question_text: "q".into(),
      options: ["1".into(), "2".into(), "2".into(), "3".into()],
      correct_answer_index: 0,
      explanation: String::new(),
    });
    assert!(mc.check_structure().is_err());

    let ms = Question::MultipleSelection(MultipleSelectionQuestion {
      id: "b".into(),
      question_text: "q".into(),
      options: ["1".into(), "2".into(), "3".into(), "4".into()],
      correct_answer_indices: vec![0, 1, 2, 3],
      explanation: String::new(),
    });
    assert!(ms.check_structure().is_err());
  }

  #[test]
  fn counts_from_total_split_evenly() {
    assert_eq!(QuestionCounts::from_total(15), QuestionCounts::new(5, 5, 5, 0));
    assert_eq!(QuestionCounts::from_total(4), QuestionCounts::new(1, 2, 1, 0));
    assert_eq!(QuestionCounts::from_total(5), QuestionCounts::new(2, 2, 1, 0));
    assert_eq!(QuestionCounts::from_total(1), QuestionCounts::new(0, 1, 0, 0));
  }

  #[test]
  fn kind_tags_accept_short_forms() {
    assert_eq!(QuestionKind::from_tag("tf"), Some(QuestionKind::TrueFalse));
    assert_eq!(QuestionKind::from_tag("MULTIPLE_SELECTION"), Some(QuestionKind::MultipleSelection));
    assert_eq!(QuestionKind::from_tag("essay"), None);
  }
}
