use std::collections::BTreeMap;

use reqwest::Url;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::HttpError;

use super::BodyMode;

pub(super) fn build_target_url(
    base_url: &str,
    path: &str,
    query: &[(String, String)],
) -> Result<Url, HttpError> {
    let mut target = format!("{}{}", base_url, path);
    if !query.is_empty() {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter().map(|(key, value)| (key.as_str(), value.as_str())))
            .finish();
        target.push('?');
        target.push_str(&encoded);
    }
    Url::parse(&target).map_err(|err| HttpError::InvalidUrl {
        url: target,
        source: err,
    })
}

pub(super) fn encode_body(mode: BodyMode, value: &Value) -> Result<String, HttpError> {
    match mode {
        BodyMode::Json => {
            serde_json::to_string(value).map_err(|err| HttpError::SerializeJson { source: err })
        }
        BodyMode::Form => {
            let object = value.as_object().ok_or(HttpError::FormBodyNotObject)?;
            let mut serializer = form_urlencoded::Serializer::new(String::new());
            for (field, entry) in object {
                let scalar = match entry {
                    Value::String(text) => text.clone(),
                    Value::Number(number) => number.to_string(),
                    Value::Bool(flag) => flag.to_string(),
                    Value::Null => String::new(),
                    Value::Array(_) | Value::Object(_) => {
                        return Err(HttpError::FormFieldUnsupported {
                            field: field.clone(),
                        });
                    }
                };
                serializer.append_pair(field, &scalar);
            }
            Ok(serializer.finish())
        }
    }
}

// Later layers overwrite earlier ones; the map keeps keys case-sensitive.
pub(super) fn layer_headers(
    defaults: &BTreeMap<String, String>,
    mode: BodyMode,
    payload: Option<&str>,
    token: Option<&str>,
    overrides: &[(String, String)],
) -> BTreeMap<String, String> {
    let mut headers = defaults.clone();
    if let Some(payload) = payload {
        let content_type = match mode {
            BodyMode::Form => "application/x-www-form-urlencoded",
            BodyMode::Json => "application/json",
        };
        headers.insert("Content-type".to_owned(), content_type.to_owned());
        headers.insert("Content-Length".to_owned(), payload.len().to_string());
    }
    if let Some(token) = token {
        headers.insert("authorization".to_owned(), format!("Bearer {}", token));
    }
    for (name, value) in overrides {
        headers.insert(name.clone(), value.clone());
    }
    headers
}
