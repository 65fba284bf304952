use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build request: {source}")]
    BuildRequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Form bodies must be a JSON object.")]
    FormBodyNotObject,
    #[error("Form field '{field}' is not a scalar value.")]
    FormFieldUnsupported { field: String },
    #[error("Failed to serialize JSON body: {source}")]
    SerializeJson {
        #[source]
        source: serde_json::Error,
    },
    #[error("Request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
}
