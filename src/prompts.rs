//! Prompt templates for evaluation generation and OMR extraction.
//!
//! Every field can be overridden from the `[prompts]` table of the TOML config.
//! Placeholders are filled with `util::fill_template`:
//!
//! - generation: `{topic}`, `{course}`, `{subject}`, `{total}`, `{tf}`, `{mc}`,
//!   `{ms}`, `{source}`, `{timestamp}`, `{seed}`
//! - omr: `{context}`, `{expected}`, `{focus}`

use serde::Deserialize;

use crate::classify::Domain;
use crate::domain::{Language, QuestionCounts};
use crate::util::{fill_template, truncate_chars};

pub const MATH_SOURCE_CHARS: usize = 2000;
pub const GENERAL_SOURCE_CHARS: usize = 4000;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  pub math_es: String,
  pub math_en: String,
  pub general_es: String,
  pub general_en: String,
  pub omr: String,
  pub omr_focus: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      math_es: MATH_ES.into(),
      math_en: MATH_EN.into(),
      general_es: GENERAL_ES.into(),
      general_en: GENERAL_EN.into(),
      omr: OMR.into(),
      omr_focus: OMR_FOCUS.into(),
    }
  }
}

/// Inputs of one generation prompt.
#[derive(Debug)]
pub struct GenerationPromptInput<'a> {
  pub topic: &'a str,
  pub subject: &'a str,
  pub course: &'a str,
  pub counts: QuestionCounts,
  pub pdf_content: Option<&'a str>,
  pub timestamp: i64,
  pub seed: u32,
}

impl Prompts {
  fn generation_template(&self, domain: Domain, language: Language) -> &str {
    match (domain == Domain::MathPhysics, language) {
      (true, Language::Es) => &self.math_es,
      (true, Language::En) => &self.math_en,
      (false, Language::Es) => &self.general_es,
      (false, Language::En) => &self.general_en,
    }
  }

  pub fn render_generation(&self, domain: Domain, language: Language, input: &GenerationPromptInput<'_>) -> String {
    let is_math = domain == Domain::MathPhysics;
    let source = match input.pdf_content.map(str::trim).filter(|s| !s.is_empty()) {
      Some(text) => {
        let limit = if is_math { MATH_SOURCE_CHARS } else { GENERAL_SOURCE_CHARS };
        let heading = match (is_math, language) {
          (true, Language::Es) => "Contenido del libro para adaptar la dificultad:",
          (true, Language::En) => "Book content to adapt difficulty:",
          (false, Language::Es) => "Contenido del libro para basar las preguntas:",
          (false, Language::En) => "Book content to base questions on:",
        };
        format!("{}\n{}", heading, truncate_chars(text, limit))
      }
      None => String::new(),
    };

    let course = if input.course.trim().is_empty() { "General" } else { input.course };
    let c = input.counts;
    fill_template(
      self.generation_template(domain, language),
      &[
        ("topic", input.topic),
        ("course", course),
        ("subject", input.subject),
        ("total", &c.ai_total().to_string()),
        ("tf", &c.tf.to_string()),
        ("mc", &c.mc.to_string()),
        ("ms", &c.ms.to_string()),
        ("timestamp", &input.timestamp.to_string()),
        ("seed", &input.seed.to_string()),
        ("source", &source),
      ],
    )
  }

  /// `focus` must already be filtered and deduplicated.
  pub fn render_omr(&self, context: &str, expected: usize, focus: &[u32]) -> String {
    let expected = if expected > 0 { expected.to_string() } else { "auto".to_string() };
    let focus_block = if focus.is_empty() {
      String::new()
    } else {
      let nums: Vec<String> = focus.iter().map(u32::to_string).collect();
      fill_template(&self.omr_focus, &[("nums", &nums.join(", "))])
    };
    let context = if context.trim().is_empty() { "N/D" } else { context };
    fill_template(&self.omr, &[("context", context), ("expected", &expected), ("focus", &focus_block)])
  }
}

const MATH_ES: &str = r#"Eres un profesor experto en MATEMÁTICAS. Genera una evaluación con PROBLEMAS MATEMÁTICOS REALES sobre el tema "{topic}" para el curso "{course}".

Las preguntas deben ser PROBLEMAS con OPERACIONES Y CÁLCULOS concretos que el estudiante resuelve para llegar a la respuesta. NO generes preguntas conceptuales ni de definiciones.

{source}

Genera exactamente {total} preguntas: {tf} TRUE_FALSE, {mc} MULTIPLE_CHOICE y {ms} MULTIPLE_SELECTION, con este formato JSON:
{
  "evaluationTitle": "Evaluación - {topic}",
  "questions": [
    {"type": "TRUE_FALSE", "questionText": "El resultado de 25 × 4 es igual a 100", "correctAnswer": true, "explanation": "25 × 4 = 100."},
    {"type": "MULTIPLE_CHOICE", "questionText": "María tiene 24 manzanas y las reparte entre 6 amigos. ¿Cuántas recibe cada uno?", "options": ["4 manzanas", "3 manzanas", "5 manzanas", "6 manzanas"], "correctAnswerIndex": 0, "explanation": "24 ÷ 6 = 4."},
    {"type": "MULTIPLE_SELECTION", "questionText": "¿Cuáles operaciones dan como resultado 12?", "options": ["3 × 4", "24 ÷ 3", "6 + 6", "15 - 2"], "correctAnswerIndices": [0, 2], "explanation": "3 × 4 = 12 y 6 + 6 = 12."}
  ]
}

Reglas:
1. TODAS las preguntas requieren cálculos con números concretos.
2. Las TRUE_FALSE afirman resultados de operaciones (correctos o incorrectos).
3. Cada MULTIPLE_CHOICE y MULTIPLE_SELECTION tiene exactamente 4 opciones distintas.
4. MULTIPLE_CHOICE tiene un único correctAnswerIndex entre 0 y 3.
5. MULTIPLE_SELECTION tiene 2 o 3 índices correctos en correctAnswerIndices.
6. La dificultad corresponde al tema "{topic}" y al curso "{course}".

Semilla de variación: {timestamp}-{seed}. Responde SOLO con el JSON, sin texto adicional."#;

const MATH_EN: &str = r#"You are an expert MATHEMATICS teacher. Generate an evaluation with REAL MATH PROBLEMS about "{topic}" for the "{course}" course.

Questions must be PROBLEMS with concrete OPERATIONS AND CALCULATIONS that students solve to reach the answer. Do NOT generate conceptual or definition questions.

{source}

Generate exactly {total} questions: {tf} TRUE_FALSE, {mc} MULTIPLE_CHOICE and {ms} MULTIPLE_SELECTION, in this JSON format:
{
  "evaluationTitle": "Evaluation - {topic}",
  "questions": [
    {"type": "TRUE_FALSE", "questionText": "The result of 25 × 4 equals 100", "correctAnswer": true, "explanation": "25 × 4 = 100."},
    {"type": "MULTIPLE_CHOICE", "questionText": "Maria shares 24 apples equally among 6 friends. How many does each get?", "options": ["4 apples", "3 apples", "5 apples", "6 apples"], "correctAnswerIndex": 0, "explanation": "24 ÷ 6 = 4."},
    {"type": "MULTIPLE_SELECTION", "questionText": "Which operations result in 12?", "options": ["3 × 4", "24 ÷ 3", "6 + 6", "15 - 2"], "correctAnswerIndices": [0, 2], "explanation": "3 × 4 = 12 and 6 + 6 = 12."}
  ]
}

Rules:
1. ALL questions require calculations with concrete numbers.
2. TRUE_FALSE items state operation results (right or wrong).
3. Every MULTIPLE_CHOICE and MULTIPLE_SELECTION has exactly 4 distinct options.
4. MULTIPLE_CHOICE has a single correctAnswerIndex between 0 and 3.
5. MULTIPLE_SELECTION has 2 or 3 correct indices in correctAnswerIndices.
6. Difficulty matches "{topic}" at the "{course}" level.

Variation seed: {timestamp}-{seed}. Respond ONLY with the JSON, no additional text."#;

const GENERAL_ES: &str = r#"Eres un profesor experto en educación. Genera una evaluación sobre el tema "{topic}" para el curso "{course}" en la asignatura "{subject}".

Las preguntas deben evaluar CONOCIMIENTO ESPECÍFICO de "{topic}". NO generes preguntas sobre qué es una asignatura ni sobre objetivos de aprendizaje.

{source}

Genera exactamente {total} preguntas: {tf} TRUE_FALSE, {mc} MULTIPLE_CHOICE y {ms} MULTIPLE_SELECTION, con este formato JSON:
{
  "evaluationTitle": "Evaluación - {topic}",
  "questions": [
    {"type": "TRUE_FALSE", "questionText": "Afirmación específica sobre {topic}", "correctAnswer": true, "explanation": "Explicación"},
    {"type": "MULTIPLE_CHOICE", "questionText": "Pregunta sobre {topic}", "options": ["Opción A", "Opción B", "Opción C", "Opción D"], "correctAnswerIndex": 0, "explanation": "Explicación"},
    {"type": "MULTIPLE_SELECTION", "questionText": "¿Cuáles de los siguientes...?", "options": ["Opción A", "Opción B", "Opción C", "Opción D"], "correctAnswerIndices": [0, 2], "explanation": "Explicación"}
  ]
}

Reglas:
1. TODAS las preguntas tratan el contenido de "{topic}".
2. TRUE_FALSE lleva correctAnswer (booleano).
3. MULTIPLE_CHOICE lleva exactamente 4 opciones distintas y un correctAnswerIndex entre 0 y 3.
4. MULTIPLE_SELECTION lleva exactamente 4 opciones distintas y 2 o 3 índices en correctAnswerIndices.
5. Preguntas variadas que evalúen comprensión real.

Semilla de variación: {timestamp}-{seed}. Responde SOLO con el JSON, sin texto adicional."#;

const GENERAL_EN: &str = r#"You are an expert teacher. Generate an evaluation about "{topic}" for the "{course}" course in the "{subject}" subject.

Questions must assess SPECIFIC KNOWLEDGE of "{topic}". Do NOT ask what a subject is or about learning objectives.

{source}

Generate exactly {total} questions: {tf} TRUE_FALSE, {mc} MULTIPLE_CHOICE and {ms} MULTIPLE_SELECTION, in this JSON format:
{
  "evaluationTitle": "Evaluation - {topic}",
  "questions": [
    {"type": "TRUE_FALSE", "questionText": "Specific statement about {topic}", "correctAnswer": true, "explanation": "Explanation"},
    {"type": "MULTIPLE_CHOICE", "questionText": "Question about {topic}", "options": ["Option A", "Option B", "Option C", "Option D"], "correctAnswerIndex": 0, "explanation": "Explanation"},
    {"type": "MULTIPLE_SELECTION", "questionText": "Which of the following...?", "options": ["Option A", "Option B", "Option C", "Option D"], "correctAnswerIndices": [0, 2], "explanation": "Explanation"}
  ]
}

Rules:
1. ALL questions are about the content of "{topic}".
2. TRUE_FALSE has correctAnswer (boolean).
3. MULTIPLE_CHOICE has exactly 4 distinct options and one correctAnswerIndex between 0 and 3.
4. MULTIPLE_SELECTION has exactly 4 distinct options and 2 or 3 indices in correctAnswerIndices.
5. Varied questions that assess real understanding.

Variation seed: {timestamp}-{seed}. Respond ONLY with the JSON, no additional text."#;

const OMR: &str = r#"ROL: Auditor Forense de Exámenes Escolares (visión artificial OMR).

CONTEXTO DE LA PRUEBA: {context}
PREGUNTAS ESPERADAS: {expected}
{focus}
TAREA: analiza visualmente cada página y reporta CADA pregunta numerada por separado. No agrupes ni omitas preguntas.

TIPOS DE PREGUNTA:
- "tf" (Verdadero/Falso): detected = "V", "F" o null.
- "mc" (alternativas A-D, una correcta): detected = una letra mayúscula o null. Si hay más de una marca, la respuesta se invalida: detected = null.
- "ms" (selección múltiple): detected = letras marcadas en orden alfabético separadas por coma, por ejemplo "A,C"; null si no hay marcas.

CLASIFICACIÓN DE EVIDENCIA (campo "evidence"):
- "STRONG_X": X clara y fuerte. Válida.
- "CHECK": visto o palomita. Válida.
- "CIRCLE": círculo alrededor de la opción. Válida.
- "FILL": opción rellenada o sombreada. Válida.
- "EMPTY": sin marca. detected = null.
- "WEAK_MARK": garabato dudoso. detected = null.

ESTUDIANTE: busca "Nombre:" o "Estudiante:" y "RUT:" en el encabezado.

FORMATO DE RESPUESTA (solo JSON):
{
  "studentName": "Nombre o null",
  "rut": "RUT o null",
  "questionsFound": 6,
  "confidence": "high | medium | low",
  "answers": [
    {"questionNum": 1, "questionType": "tf", "evidence": "STRONG_X", "detected": "V", "points": null},
    {"questionNum": 2, "questionType": "mc", "evidence": "CIRCLE", "detected": "B", "points": null},
    {"questionNum": 3, "questionType": "ms", "evidence": "STRONG_X", "detected": "A,C", "points": null},
    {"questionNum": 4, "questionType": "mc", "evidence": "EMPTY", "detected": null, "points": null}
  ]
}

Devuelve SOLO JSON válido, sin markdown ni explicaciones."#;

const OMR_FOCUS: &str = r#"
MODO RE-REVISIÓN: analiza ÚNICAMENTE las preguntas {nums}. Devuelve exactamente una entrada por cada una de ellas y ninguna otra.
"#;

#[cfg(test)]
mod tests {
  use super::*;

  fn input<'a>(pdf: Option<&'a str>) -> GenerationPromptInput<'a> {
    GenerationPromptInput {
      topic: "fracciones",
      subject: "Matemáticas",
      course: "5to Básico",
      counts: QuestionCounts::new(3, 3, 0, 2),
      pdf_content: pdf,
      timestamp: 1700000000,
      seed: 42,
    }
  }

  #[test]
  fn math_prompt_states_counts_and_forbids_conceptual_questions() {
    let p = Prompts::default().render_generation(Domain::MathPhysics, Language::Es, &input(None));
    assert!(p.contains("exactamente 6 preguntas: 3 TRUE_FALSE, 3 MULTIPLE_CHOICE y 0 MULTIPLE_SELECTION"));
    assert!(p.contains("NO generes preguntas conceptuales"));
    assert!(p.contains("1700000000-42"));
    assert!(!p.contains("{topic}"));
    assert!(p.contains("\"correctAnswerIndices\": [0, 2]"));
  }

  #[test]
  fn source_text_is_trimmed_per_domain() {
    let long = "x".repeat(5000);
    let math = Prompts::default().render_generation(Domain::MathPhysics, Language::En, &input(Some(&long)));
    let general = Prompts::default().render_generation(Domain::Science, Language::En, &input(Some(&long)));
    assert!(math.contains(&"x".repeat(MATH_SOURCE_CHARS)));
    assert!(!math.contains(&"x".repeat(MATH_SOURCE_CHARS + 1)));
    assert!(general.contains(&"x".repeat(GENERAL_SOURCE_CHARS)));
    assert!(!general.contains(&"x".repeat(GENERAL_SOURCE_CHARS + 1)));
  }

  #[test]
  fn omr_prompt_adds_recheck_block_only_with_focus() {
    let prompts = Prompts::default();
    let plain = prompts.render_omr("Prueba 1 | Ciencias", 10, &[]);
    assert!(plain.contains("Auditor Forense"));
    assert!(plain.contains("PREGUNTAS ESPERADAS: 10"));
    assert!(!plain.contains("RE-REVISIÓN"));

    let focus = prompts.render_omr("", 0, &[3, 7]);
    assert!(focus.contains("CONTEXTO DE LA PRUEBA: N/D"));
    assert!(focus.contains("ÚNICAMENTE las preguntas 3, 7"));
  }

  #[test]
  fn partial_toml_override_keeps_other_defaults() {
    let p: Prompts = toml::from_str("math_es = \"solo {topic}\"").unwrap();
    assert_eq!(p.math_es, "solo {topic}");
    assert_eq!(p.general_es, GENERAL_ES);
  }
}
