use serde::Serialize;
use serde_json::Value;

use crate::contract::ParameterEncoding;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEncodingStrategy {
    #[default]
    UseDefaultKeys,
    ConvertToSnakeCase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyDecodingStrategy {
    #[default]
    UseDefaultKeys,
    ConvertFromSnakeCase,
}

/// Rules for rendering outgoing payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodePolicy {
    pub keys: KeyEncodingStrategy,
    /// Separator used when a flattened list value is rendered into a
    /// single query or form field.
    pub list_separator: String,
}

impl Default for EncodePolicy {
    fn default() -> Self {
        Self {
            keys: KeyEncodingStrategy::default(),
            list_separator: ",".to_string(),
        }
    }
}

/// Rules for mapping response documents onto typed values.
///
/// Date and raw-data handling are compile-time serde attributes in Rust,
/// so the runtime policy carries the key-casing strategy only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodePolicy {
    pub keys: KeyDecodingStrategy,
}

/// Result of body encoding: raw bytes ready to send, or query items that
/// still need percent-encoding into a form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedBody {
    Bytes(Vec<u8>),
    QueryItems(Vec<(String, String)>),
}

/// Flatten a payload into query items.
///
/// Scalars take their natural string form, lists of scalars are joined
/// with the policy separator, `null` fields are dropped. Anything nested
/// fails fast with the offending path — data is never dropped silently.
pub fn query_items<P>(payload: &P, policy: &EncodePolicy) -> Result<Vec<(String, String)>>
where
    P: Serialize + ?Sized,
{
    let value = to_value(payload, policy.keys)?;
    flatten(&value, &policy.list_separator)
}

/// Encode a body payload according to the contract's parameter encoding.
pub fn encode_body<P>(
    payload: &P,
    encoding: &ParameterEncoding,
    policy: &EncodePolicy,
) -> Result<EncodedBody>
where
    P: Serialize + ?Sized,
{
    match encoding {
        ParameterEncoding::Json => Ok(EncodedBody::Bytes(to_json_bytes(payload, policy.keys)?)),
        ParameterEncoding::FormUrl => {
            let value = to_value(payload, policy.keys)?;
            Ok(EncodedBody::QueryItems(flatten(&value, &policy.list_separator)?))
        }
        ParameterEncoding::Xml => {
            // The payload must already be a rendered XML document.
            match to_value(payload, KeyEncodingStrategy::UseDefaultKeys)? {
                Value::String(xml) => Ok(EncodedBody::Bytes(xml.into_bytes())),
                other => Err(Error::Encoding(format!(
                    "xml body must be a pre-rendered string, found {}",
                    json_type(&other)
                ))),
            }
        }
        ParameterEncoding::Custom { transform, .. } => {
            let bytes = to_json_bytes(payload, policy.keys)?;
            let transformed = transform(bytes)
                .map_err(|e| Error::Encoding(format!("custom body transform: {e}")))?;
            Ok(EncodedBody::Bytes(transformed))
        }
    }
}

/// Extract a header payload as a flat string-to-string map.
pub fn header_items<P>(payload: &P, policy: &EncodePolicy) -> Result<Vec<(String, String)>>
where
    P: Serialize + ?Sized,
{
    let value = to_value(payload, policy.keys)?;
    let Value::Object(map) = value else {
        return Err(Error::Encoding(format!(
            "expected a flat string map header payload, found {}",
            json_type(&value)
        )));
    };
    let mut items = Vec::with_capacity(map.len());
    for (key, entry) in &map {
        let Value::String(text) = entry else {
            return Err(Error::Encoding(format!(
                "header `{key}` must be a string value, found {}",
                json_type(entry)
            )));
        };
        items.push((key.clone(), text.clone()));
    }
    Ok(items)
}

fn to_value<P>(payload: &P, keys: KeyEncodingStrategy) -> Result<Value>
where
    P: Serialize + ?Sized,
{
    let mut value = serde_json::to_value(payload).map_err(|e| Error::Encoding(e.to_string()))?;
    if keys == KeyEncodingStrategy::ConvertToSnakeCase {
        transform_keys(&mut value, &to_snake_case);
    }
    Ok(value)
}

fn to_json_bytes<P>(payload: &P, keys: KeyEncodingStrategy) -> Result<Vec<u8>>
where
    P: Serialize + ?Sized,
{
    let value = to_value(payload, keys)?;
    serde_json::to_vec(&value).map_err(|e| Error::Encoding(e.to_string()))
}

fn flatten(value: &Value, separator: &str) -> Result<Vec<(String, String)>> {
    let Value::Object(map) = value else {
        return Err(Error::Encoding(format!(
            "expected a key/value payload, found {}",
            json_type(value)
        )));
    };
    let mut items = Vec::with_capacity(map.len());
    for (key, entry) in map {
        match entry {
            Value::Null => continue,
            Value::Array(entries) => {
                let mut parts = Vec::with_capacity(entries.len());
                for (index, element) in entries.iter().enumerate() {
                    let Some(text) = scalar(element) else {
                        return Err(Error::Encoding(format!(
                            "cannot flatten nested value at `{key}[{index}]`"
                        )));
                    };
                    parts.push(text);
                }
                items.push((key.clone(), parts.join(separator)));
            }
            other => {
                let Some(text) = scalar(other) else {
                    return Err(Error::Encoding(format!("cannot flatten nested value at `{key}`")));
                };
                items.push((key.clone(), text));
            }
        }
    }
    Ok(items)
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Rewrite every object key in the document, recursively.
pub(crate) fn transform_keys(value: &mut Value, transform: &dyn Fn(&str) -> String) {
    match value {
        Value::Object(map) => {
            let entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            for (key, mut entry) in entries {
                transform_keys(&mut entry, transform);
                map.insert(transform(&key), entry);
            }
        }
        Value::Array(entries) => {
            for entry in entries {
                transform_keys(entry, transform);
            }
        }
        _ => {}
    }
}

pub(crate) fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for c in key.chars() {
        if c.is_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub(crate) fn from_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' && !out.is_empty() {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
