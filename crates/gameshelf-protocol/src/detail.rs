//! Extraction of the human-readable `detail` from error bodies.
//!
//! The service reports failures as `{"detail": ...}`. For handled errors
//! (bad credentials, duplicate entries) `detail` is a plain string; for
//! request validation failures it is a list of `{loc, msg, type}` objects.

use serde::Deserialize;

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<Detail>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Issues(Vec<Issue>),
    // Matched only to keep decoding from failing on unknown shapes.
    #[allow(dead_code)]
    Other(serde_json::Value),
}

#[derive(Deserialize)]
struct Issue {
    msg: String,
}

/// Returns the server's `detail` message, if the body carries a usable one.
///
/// - `{"detail": "Incorrect credentials"}` → `"Incorrect credentials"`
/// - `{"detail": [{"msg": "a"}, {"msg": "b"}]}` → `"a; b"`
/// - anything else (non-JSON, no `detail`, blank text) → `None`
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    let message = match parsed.detail? {
        Detail::Message(text) => text,
        Detail::Issues(issues) => issues
            .into_iter()
            .map(|i| i.msg)
            .filter(|m| !m.trim().is_empty())
            .collect::<Vec<_>>()
            .join("; "),
        Detail::Other(_) => return None,
    };
    let message = message.trim();
    (!message.is_empty()).then(|| message.to_string())
}
