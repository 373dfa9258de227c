//! Small utility helpers used across modules.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic).
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Lowercase, decompose (NFD), drop combining marks, trim.
/// Every classifier regex and every dedup signature runs on this form.
pub fn normalize(s: &str) -> String {
  s.trim()
    .nfd()
    .filter(|c| !is_combining_mark(*c))
    .collect::<String>()
    .to_lowercase()
}

/// Upper-case the first character only ("sistema solar" -> "Sistema solar").
pub fn capitalize_first(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Strip markdown code fences (```json ... ```) that models like to wrap JSON in.
pub fn strip_code_fences(s: &str) -> String {
  let t = s.trim();
  let t = t
    .strip_prefix("```json")
    .or_else(|| t.strip_prefix("```JSON"))
    .or_else(|| t.strip_prefix("```"))
    .unwrap_or(t);
  let t = t.strip_suffix("```").unwrap_or(t);
  t.trim().to_string()
}

/// Slice from the first `{` to the last `}` (inclusive), if both exist in order.
pub fn outermost_json_object(s: &str) -> Option<&str> {
  let start = s.find('{')?;
  let end = s.rfind('}')?;
  if end > start { Some(&s[start..=end]) } else { None }
}

/// Char-boundary-safe prefix of at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> &str {
  match s.char_indices().nth(max) {
    Some((idx, _)) => &s[..idx],
    None => s,
  }
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  let head = truncate_chars(s, max);
  if head.len() == s.len() { s.to_string() } else { format!("{}… ({} bytes total)", head, s.len()) }
}
