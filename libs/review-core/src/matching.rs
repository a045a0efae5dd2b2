//! Answer matching for submitted quiz responses.

use serde::{Deserialize, Serialize};

use crate::types::Quiz;

/// Result of checking a response against a quiz's accepted answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the response is considered correct.
    pub is_correct: bool,
    /// Best similarity score between 0.0 and 1.0.
    pub similarity: f64,
    /// The accepted answer that scored best, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
}

/// Check a response against every accepted answer of `quiz`.
///
/// Enumerated kinds need the trimmed response to equal an accepted answer.
/// Text-style kinds pass when the best fuzzy similarity reaches `fuzzy_threshold`.
pub fn check_response(quiz: &Quiz, response: &str, fuzzy_threshold: f64) -> MatchResult {
    if quiz.kind.is_enumerated() {
        let selected = response.trim();
        let matched = quiz
            .correct_responses
            .iter()
            .find(|accepted| accepted.trim() == selected)
            .cloned();
        return MatchResult {
            is_correct: matched.is_some(),
            similarity: if matched.is_some() { 1.0 } else { 0.0 },
            matched,
        };
    }

    let typed = normalize(response);
    let mut best: Option<(f64, &String)> = None;
    for accepted in &quiz.correct_responses {
        let similarity = normalized_similarity(&typed, &normalize(accepted));
        if best.map_or(true, |(score, _)| similarity > score) {
            best = Some((similarity, accepted));
        }
    }

    match best {
        Some((similarity, accepted)) => MatchResult {
            is_correct: similarity >= fuzzy_threshold,
            similarity,
            matched: Some(accepted.clone()),
        },
        None => MatchResult {
            is_correct: false,
            similarity: 0.0,
            matched: None,
        },
    }
}

/// Lowercase and collapse whitespace.
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rolling rows
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Calculate normalized similarity (0.0 to 1.0) based on Levenshtein distance.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}
