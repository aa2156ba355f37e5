use crate::error::CoreError;
use crate::model::NameMatch;
use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("static pattern"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Generic words that carry no identity: articles and the boilerplate every
/// tour event name drags along.
const STOP_WORDS: [&str; 15] = [
    "the",
    "a",
    "an",
    "of",
    "at",
    "in",
    "and",
    "by",
    "golf",
    "championship",
    "tournament",
    "invitational",
    "classic",
    "cup",
    "presented",
];

const OVERLAP_THRESHOLD: f64 = 0.6;
const RELAXED_THRESHOLD: f64 = 0.5;
const RELAXED_MIN_SHARED: usize = 2;

/// Fuzzy compatibility check between our event name and an external feed's.
/// Containment of one normalized name in the other is an immediate match;
/// otherwise significant-token overlap decides.
#[must_use]
pub fn match_event_names(expected: &str, actual: &str) -> NameMatch {
    let expected_norm = normalize(expected);
    let actual_norm = normalize(actual);

    let expected_tokens = tokenize(&expected_norm);
    let actual_tokens = tokenize(&actual_norm);

    if !expected_norm.is_empty()
        && !actual_norm.is_empty()
        && (expected_norm.contains(&actual_norm) || actual_norm.contains(&expected_norm))
    {
        let contained = if expected_norm.contains(&actual_norm) {
            actual_tokens.clone()
        } else {
            expected_tokens.clone()
        };
        return NameMatch {
            compatible: true,
            score: 1.0,
            overlapping_tokens: contained,
            expected_tokens,
            actual_tokens,
        };
    }

    let overlapping_tokens: Vec<String> = expected_tokens
        .iter()
        .filter(|token| actual_tokens.contains(token))
        .cloned()
        .collect();

    let denom = expected_tokens.len().max(actual_tokens.len()).max(1);
    let score = overlapping_tokens.len() as f64 / denom as f64;
    let compatible = score >= OVERLAP_THRESHOLD
        || (score >= RELAXED_THRESHOLD && overlapping_tokens.len() >= RELAXED_MIN_SHARED);

    NameMatch {
        compatible,
        score,
        overlapping_tokens,
        expected_tokens,
        actual_tokens,
    }
}

/// Gate for feed ingestion: refuse data whose event name is not compatible
/// with the tournament we expect.
///
/// # Errors
///
/// Will return `Err` if the names are incompatible.
pub fn confirm_event_identity(expected: &str, actual: &str) -> Result<NameMatch, CoreError> {
    let verdict = match_event_names(expected, actual);
    if verdict.compatible {
        Ok(verdict)
    } else {
        Err(CoreError::Input(format!(
            "event name mismatch: expected '{expected}', feed reported '{actual}'"
        )))
    }
}

fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = NON_ALNUM.replace_all(&lowered, "");
    WHITESPACE.replace_all(stripped.trim(), " ").to_string()
}

fn tokenize(normalized: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for word in normalized.split(' ') {
        if word.is_empty() || word.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let token = singularize(word);
        if STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

fn singularize(word: &str) -> String {
    if word.len() > 3 && word.ends_with('s') {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}
