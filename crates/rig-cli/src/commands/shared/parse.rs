use serde::de::DeserializeOwned;

/// Parse an enum value using serde-deserialization.
///
/// The value is tried as given first, then with `-` folded to `_`, so both
/// kebab-case (`content-creation`) and snake_case (`psu`) enums accept either
/// spelling where it is unambiguous.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let trimmed = raw.trim().to_ascii_lowercase();
    serde_json::from_value(serde_json::Value::String(trimmed.clone())).or_else(|_| {
        serde_json::from_value(serde_json::Value::String(trimmed.replace('-', "_")))
            .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
    })
}
