//! Test fixtures and factory functions for creating request bodies.

use serde_json::{json, Value};
use uuid::Uuid;

/// Private prompt/response quiz owned by `owner_id`.
pub fn prompt_quiz(owner_id: Uuid, prompt: &str, answer: &str) -> Value {
    json!({
        "type": "prompt-response",
        "prompt": prompt,
        "correct_responses": [answer],
        "owner_id": owner_id,
    })
}

/// Quiz with hints, readable by everyone.
pub fn public_quiz_with_hints(owner_id: Uuid, prompt: &str, answer: &str, hints: &[&str]) -> Value {
    json!({
        "type": "fill-in-the-blank",
        "prompt": prompt,
        "correct_responses": [answer],
        "hints": hints,
        "owner_id": owner_id,
        "public": true,
    })
}

/// Multiple-choice quiz owned by `owner_id`.
pub fn multiple_choice_quiz(owner_id: Uuid, prompt: &str, choices: &[&str], answer: &str) -> Value {
    json!({
        "type": "multiple-choice",
        "prompt": prompt,
        "choices": choices,
        "correct_responses": [answer],
        "owner_id": owner_id,
    })
}

/// Body for the answer endpoint.
pub fn answer_request(quiz_id: Uuid, response: &str, failures: u32) -> Value {
    json!({
        "quiz_id": quiz_id,
        "response": response,
        "failures": failures,
    })
}
