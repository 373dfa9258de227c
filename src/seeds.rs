//! Built-in last-resort content.

use crate::domain::{Evaluation, Language, Question, TrueFalseQuestion};

/// Absolute last-resort fallback: a one-question evaluation that is still
/// well formed. Used when the requested counts add up to zero.
pub fn hard_fallback_evaluation(topic: &str, subject: &str, language: Language, run: &str) -> Evaluation {
  let topic = topic.trim();
  let subject = match subject.trim() {
    "" => "General",
    s => s,
  };
  let (text, explanation) = match language {
    Language::Es => (
      format!("¿El tema \"{}\" está relacionado con \"{}\"?", topic, subject),
      "Pregunta de respaldo generada automáticamente.".to_string(),
    ),
    Language::En => (
      format!("Is the topic \"{}\" related to \"{}\"?", topic, subject),
      "Automatically generated fallback question.".to_string(),
    ),
  };
  Evaluation {
    evaluation_title: format!("{} - {}", language.title_prefix(), topic.to_uppercase()),
    questions: vec![Question::TrueFalse(TrueFalseQuestion {
      id: format!("tf_{}_1", run),
      question_text: text,
      correct_answer: true,
      explanation,
    })],
  }
}
