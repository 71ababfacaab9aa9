//! Response decoding helpers.
//!
//! With the `tracing` feature enabled, decoding logs a warning for every field the exchange
//! sent that the typed result does not capture, and logs the JSON path of the value that made
//! decoding fail. Without it, decoding is a plain [`serde_json::from_slice`].

use serde::de::DeserializeOwned;
#[cfg(feature = "tracing")]
use serde_json::Value;

/// Decode a response body into `T`, warning about unknown fields.
///
/// Unknown fields never fail decoding; the exchange adds fields to its schema without notice.
#[cfg(feature = "tracing")]
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> crate::Result<T> {
    use std::any::type_name;

    let value: Value = serde_json::from_slice(body)?;

    tracing::trace!(type_name = %type_name::<T>(), json = %value, "decoding response");

    let mut unknown = Vec::new();
    let result = serde_ignored::deserialize(&value, |path| unknown.push(path.to_string()));

    let decoded: T = match result {
        Ok(decoded) => decoded,
        Err(e) => {
            let jd = &mut serde_json::Deserializer::from_slice(body);
            if let Err(path_err) = serde_path_to_error::deserialize::<_, T>(jd) {
                let path = path_err.path().to_string();
                tracing::error!(
                    type_name = %type_name::<T>(),
                    path = %path,
                    value = %render_value(lookup(&value, &path)),
                    error = %path_err.inner(),
                    "response decoding failed"
                );
            }
            return Err(e.into());
        }
    };

    for path in unknown {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %render_value(lookup(&value, &path)),
            "unknown field in API response"
        );
    }

    Ok(decoded)
}

/// Decode a response body into `T`.
#[cfg(not(feature = "tracing"))]
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> crate::Result<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Resolve a `serde_ignored` (`runners.0.ex`, `?` for options) or `serde_path_to_error`
/// (`runners[0].ex`) path against `value`.
#[cfg(feature = "tracing")]
fn lookup<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    let pointer: String = path
        .replace('[', ".")
        .replace(']', "")
        .split('.')
        .filter(|segment| !segment.is_empty() && *segment != "?")
        .map(|segment| format!("/{}", segment.replace('~', "~0").replace('/', "~1")))
        .collect();

    value.pointer(&pointer)
}

#[cfg(feature = "tracing")]
fn render_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}
