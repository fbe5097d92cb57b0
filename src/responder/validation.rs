// Start of file: /src/responder/validation.rs

/*
    * Pure helpers behind `RequestFields::validate`, `validate_ids` and the guards.
*/

use once_cell::sync::Lazy;
use regex::Regex;

// 24 hex characters, the textual shape of a document-store object id
static OBJECT_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{24}$").unwrap()
});

/// Names from `mandatory` that `is_present` rejects, in their original order.
pub fn missing_fields<'a, S, F>(mandatory: &'a [S], is_present: F) -> Vec<&'a str>
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    mandatory
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|&name| !is_present(name))
        .collect()
}

/// The 406 message for a non-empty list of missing fields.
pub fn missing_fields_message(missing: &[&str]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }

    Some(format!(
        "properties `{}` are mandatory but yet missing",
        missing.join(", ")
    ))
}

pub fn is_object_id(value: &str) -> bool {
    OBJECT_ID.is_match(value)
}

/// Checks every id; the scan does not stop at the first bad one.
pub fn all_object_ids<I, T>(ids: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    ids.into_iter()
        .fold(true, |valid, id| is_object_id(id.as_ref()) && valid)
}
