//! Reading a JSON object out of free-form classifier text.
//!
//! Language models often wrap JSON in markdown fences or surround it with
//! explanation. These helpers find the object before validation.

use crate::RejectReason;
use serde_json::Value as JsonValue;

/// Extract the JSON text from an answer that may contain markdown or extra text.
///
/// The body of the first fenced code block is used when there is one,
/// otherwise the whole trimmed answer. A body that is already valid JSON is
/// returned as-is, whatever its shape, so the validator sees exactly what the
/// classifier sent. Only prose falls back to the first balanced `{ ... }`.
///
/// # Examples
///
/// ```
/// use slugline_classify::extract_json;
///
/// let answer = "Sure! Here it is:\n```json\n{\"JOHN\": {\"category\": \"CAST\"}}\n```";
/// assert_eq!(
///     extract_json(answer).as_deref(),
///     Some("{\"JOHN\": {\"category\": \"CAST\"}}")
/// );
/// assert_eq!(extract_json("[1, 2]").as_deref(), Some("[1, 2]"));
/// assert_eq!(extract_json("no json here"), None);
/// ```
pub fn extract_json(response: &str) -> Option<String> {
    let body = fenced_body(response).unwrap_or(response).trim();
    if serde_json::from_str::<JsonValue>(body).is_ok() {
        return Some(body.to_string());
    }
    first_object(body)
        .or_else(|| first_object(response))
        .map(str::to_string)
}

/// Extract and parse the answer.
///
/// The parsed value may be any JSON shape; non-objects are rejected by the
/// validator.
///
/// # Errors
///
/// Returns [`RejectReason::MalformedJson`] when no JSON is found or it
/// does not parse. This is a retryable contract violation.
pub fn parse_answer(response: &str) -> Result<JsonValue, RejectReason> {
    let raw = extract_json(response).ok_or_else(|| {
        RejectReason::MalformedJson(format!(
            "no JSON object in answer (length: {})",
            response.len()
        ))
    })?;
    serde_json::from_str(&raw).map_err(|e| RejectReason::MalformedJson(e.to_string()))
}

/// Body of the first markdown fence, without its language tag line.
///
/// A fence that never closes runs to the end of the answer.
fn fenced_body(response: &str) -> Option<&str> {
    let (_, after_fence) = response.split_once("```")?;
    let body = match after_fence.split_once('\n') {
        Some((_tag, rest)) => rest,
        None => after_fence,
    };
    Some(body.split_once("```").map_or(body, |(inner, _)| inner))
}

/// The first `{ ... }` whose braces balance outside string literals.
fn first_object(text: &str) -> Option<&str> {
    let open = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[open..].char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[open..=open + offset]);
                }
            }
            _ => {}
        }
    }
    None
}
