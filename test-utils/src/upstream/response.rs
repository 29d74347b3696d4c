//! GraphQL response envelopes.

use serde_json::{json, Value};

/// Wraps wars in the `{ data: { wars: { data: [...] } } }` envelope.
pub fn wars(wars: Vec<Value>) -> Value {
    json!({ "data": { "wars": { "data": wars } } })
}

/// Wraps alliances in the `{ data: { alliances: { data: [...] } } }` envelope.
pub fn alliances(alliances: Vec<Value>) -> Value {
    json!({ "data": { "alliances": { "data": alliances } } })
}

/// Wraps nations in the `{ data: { nations: { data: [...] } } }` envelope.
pub fn nations(nations: Vec<Value>) -> Value {
    json!({ "data": { "nations": { "data": nations } } })
}

/// Builds an error response such as the one returned for an invalid API key.
pub fn errors(messages: &[&str]) -> Value {
    let errors: Vec<Value> = messages
        .iter()
        .map(|message| json!({ "message": message }))
        .collect();

    json!({ "data": null, "errors": errors })
}
