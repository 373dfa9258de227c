//! Deterministic question synthesis from the template bank.
//!
//! `template = pool[index % pool.len()]`, so increasing indices walk the whole
//! pool before any template repeats. The same (kind, index) always yields the
//! same question text for a given synthesizer.

use crate::bank::{FrTemplate, McTemplate, MsTemplate, Pools, RubricStyle, TfTemplate};
use crate::classify::ClassificationResult;
use crate::domain::{
  FreeResponseQuestion, Language, MultipleChoiceQuestion, MultipleSelectionQuestion, Question, QuestionKind,
  TrueFalseQuestion,
};
use crate::util::{capitalize_first, fill_template, normalize};

/// Template pools and topic strings for one evaluation.
#[derive(Debug)]
pub struct Synthesizer {
  pools: Pools,
  topic: String,
  topic_cap: String,
  language: Language,
  /// Middle segment of provisional ids.
  stamp: String,
}

impl Synthesizer {
  pub fn new(class: ClassificationResult, topic: &str, language: Language, stamp: impl Into<String>) -> Self {
    let topic = topic.trim().to_string();
    Self {
      pools: Pools::resolve(class.domain, class.level, language, &normalize(&topic)),
      topic_cap: capitalize_first(&topic),
      topic,
      language,
      stamp: stamp.into(),
    }
  }

  pub fn language(&self) -> Language {
    self.language
  }

  pub fn pool_len(&self, kind: QuestionKind) -> usize {
    self.pools.len(kind)
  }

  fn fill(&self, tpl: &str) -> String {
    fill_template(tpl, &[("topic", &self.topic), ("Topic", &self.topic_cap)])
  }

  /// Never fails: every pool is non-empty by construction of the bank.
  pub fn synthesize(&self, kind: QuestionKind, index: usize) -> Question {
    let id = format!("{}_{}_{}", kind.short(), self.stamp, index);
    let len = self.pools.len(kind).max(1);
    let slot = index % len;
    match kind {
      QuestionKind::TrueFalse => self.pools.tf.get(slot).map(|t| self.true_false(id.clone(), t)),
      QuestionKind::MultipleChoice => self.pools.mc.get(slot).map(|t| self.multiple_choice(id.clone(), t)),
      QuestionKind::MultipleSelection => self.pools.ms.get(slot).map(|t| self.multiple_selection(id.clone(), t)),
      QuestionKind::FreeResponse => self.pools.fr.get(slot).map(|t| self.free_response(id.clone(), t, slot)),
    }
    .unwrap_or_else(|| self.placeholder(id, kind))
  }

  fn true_false(&self, id: String, t: &TfTemplate) -> Question {
    Question::TrueFalse(TrueFalseQuestion {
      id,
      question_text: self.fill(t.text),
      correct_answer: t.answer,
      explanation: self.fill(t.explanation),
    })
  }

  fn multiple_choice(&self, id: String, t: &McTemplate) -> Question {
    let options = t.options.map(|o| self.fill(o));
    let correct = t.correct.min(3);
    let explanation = if t.explanation.is_empty() {
      let answer = &options[correct as usize];
      match self.language {
        Language::Es => format!("La respuesta correcta es \"{}\".", answer),
        Language::En => format!("The correct answer is \"{}\".", answer),
      }
    } else {
      self.fill(t.explanation)
    };
    Question::MultipleChoice(MultipleChoiceQuestion {
      id,
      question_text: self.fill(t.text),
      options,
      correct_answer_index: correct,
      explanation,
    })
  }

  fn multiple_selection(&self, id: String, t: &MsTemplate) -> Question {
    let options: [String; 4] = [0usize, 1, 2, 3].map(|i| self.fill(t.options[i].text));
    let indices: Vec<u8> = (0u8..4).filter(|i| t.options[*i as usize].correct).collect();
    let explanation = if t.explanation.is_empty() {
      let names: Vec<String> = indices.iter().map(|i| format!("\"{}\"", options[*i as usize])).collect();
      join_correct(&names, self.language)
    } else {
      self.fill(t.explanation)
    };
    Question::MultipleSelection(MultipleSelectionQuestion {
      id,
      question_text: self.fill(t.text),
      options,
      correct_answer_indices: indices,
      explanation,
    })
  }

  fn free_response(&self, id: String, t: &FrTemplate, slot: usize) -> Question {
    let prompt = match (t.style, self.language) {
      (RubricStyle::Solution, Language::Es) => format!("Problema {}: {}", slot + 1, self.fill(t.prompt)),
      (RubricStyle::Solution, Language::En) => format!("Problem {}: {}", slot + 1, self.fill(t.prompt)),
      _ => self.fill(t.prompt),
    };
    Question::FreeResponse(FreeResponseQuestion {
      id,
      prompt,
      sample_answer: self.render_sample_answer(t),
      explanation: String::new(),
    })
  }

  fn render_sample_answer(&self, t: &FrTemplate) -> String {
    const BARE: [&str; 4] = ["100%", "75%", "50%", "25%"];
    let (answer_heading, rubric_heading, tiers): (&str, &str, [&str; 4]) = match (t.style, self.language) {
      (RubricStyle::Scored, Language::Es) => (
        "RESPUESTA ESPERADA:",
        "RÚBRICA DE PUNTAJE:",
        ["Puntaje completo (100%)", "Puntaje parcial (75%)", "Puntaje parcial (50%)", "Puntaje mínimo (25%)"],
      ),
      (RubricStyle::Scored, Language::En) => (
        "EXPECTED ANSWER:",
        "SCORING RUBRIC:",
        ["Full credit (100%)", "Partial credit (75%)", "Partial credit (50%)", "Minimum credit (25%)"],
      ),
      (RubricStyle::Solution, Language::Es) => ("RESPUESTA CORRECTA:", "RÚBRICA:", BARE),
      (RubricStyle::Solution, Language::En) => ("CORRECT ANSWER:", "RUBRIC:", BARE),
      (RubricStyle::Outline, Language::Es) => ("RESPUESTA ESPERADA:", "RÚBRICA:", BARE),
      (RubricStyle::Outline, Language::En) => ("EXPECTED ANSWER:", "RUBRIC:", BARE),
    };

    let mut out = String::from(answer_heading);
    for line in t.expected {
      out.push_str("\n• ");
      out.push_str(&self.fill(line));
    }
    out.push_str("\n\n");
    out.push_str(rubric_heading);
    for (tier, text) in tiers.iter().zip(t.rubric.iter()) {
      out.push_str(&format!("\n• {}: {}", tier, self.fill(text)));
    }
    out
  }

  // Unreachable while the bank keeps a generic template for every kind.
  fn placeholder(&self, id: String, kind: QuestionKind) -> Question {
    let (text, prompt, sample_answer) = match self.language {
      Language::Es => (
        format!("¿El tema \"{}\" es importante?", self.topic),
        format!("Explica qué sabes sobre {}.", self.topic),
        "RESPUESTA ESPERADA:\n• Explicación del tema",
      ),
      Language::En => (
        format!("Is the topic \"{}\" important?", self.topic),
        format!("Explain what you know about {}.", self.topic),
        "EXPECTED ANSWER:\n• Explanation of the topic",
      ),
    };
    match kind {
      QuestionKind::FreeResponse => Question::FreeResponse(FreeResponseQuestion {
        id,
        prompt,
        sample_answer: sample_answer.into(),
        explanation: String::new(),
      }),
      _ => Question::TrueFalse(TrueFalseQuestion { id, question_text: text, correct_answer: true, explanation: String::new() }),
    }
  }
}

fn join_correct(names: &[String], language: Language) -> String {
  let (lead, and) = match language {
    Language::Es => ("Las opciones correctas son", "y"),
    Language::En => ("The correct options are", "and"),
  };
  match names.split_last() {
    Some((last, rest)) if !rest.is_empty() => format!("{} {} {} {}.", lead, rest.join(", "), and, last),
    Some((last, _)) => format!("{} {}.", lead, last),
    None => String::new(),
  }
}
