//! The response envelope every endpoint call resolves to.

use serde::{de::DeserializeOwned, ser::SerializeMap, Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{
    types::{ApiMessage, Page},
    Error,
};

/// Outcome of a single API call.
///
/// Endpoint methods never fail with an `Err`: transport faults, non-200
/// statuses, and unparseable bodies all end up as [`ApiResponse::Failure`].
/// Serialized, a failure is `{"error": "<message>", "success": false}` and a
/// success is the parsed body as-is.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    /// HTTP 200 with a JSON body.
    Success(Value),
    /// Anything else, e.g. `HTTP Error: 404` or `Exception: ...`.
    Failure { message: String },
}

impl ApiResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        ApiResponse::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// The parsed body, for successful calls.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Failure { .. } => None,
        }
    }

    /// The failure message, for failed calls.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure { message } => Some(message),
        }
    }

    /// Deserializes a successful list response into a typed [`Page`].
    ///
    /// A failure envelope, or a body that isn't `[meta, data]` (such as an
    /// API message), is reported as a deserialization error.
    pub fn parse_page<T>(&self) -> Result<Page<T>, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        match self {
            ApiResponse::Success(value) => Page::<T>::deserialize(value),
            ApiResponse::Failure { message } => Err(serde::de::Error::custom(message)),
        }
    }

    /// Messages the API embeds in a 200 response to reject a request, e.g.
    /// an unknown country code. Empty for regular data and for failures.
    pub fn api_messages(&self) -> Vec<ApiMessage> {
        let first = match self.payload().and_then(|v| v.as_array()).and_then(|a| a.first()) {
            Some(first) => first,
            None => return Vec::new(),
        };
        match first.get("message") {
            Some(messages) => {
                serde_json::from_value::<Vec<ApiMessage>>(messages.clone()).unwrap_or_else(|e| {
                    tracing::debug!("Unrecognized API message shape: {}", e);
                    Vec::new()
                })
            }
            None => Vec::new(),
        }
    }

    /// The envelope as a JSON value (see the type docs for the failure shape).
    pub fn to_json(&self) -> Value {
        match self {
            ApiResponse::Success(value) => value.clone(),
            ApiResponse::Failure { message } => serde_json::json!({
                "error": message,
                "success": false,
            }),
        }
    }
}

impl Serialize for ApiResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ApiResponse::Success(value) => value.serialize(serializer),
            ApiResponse::Failure { message } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("error", message)?;
                map.serialize_entry("success", &false)?;
                map.end()
            }
        }
    }
}

impl From<Error> for ApiResponse {
    fn from(err: Error) -> Self {
        ApiResponse::failure(err.envelope_message())
    }
}

impl From<Result<Value, Error>> for ApiResponse {
    fn from(result: Result<Value, Error>) -> Self {
        match result {
            Ok(value) => ApiResponse::Success(value),
            Err(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ApiResponse;
    use crate::Error;

    #[test]
    fn test_failure_serializes_to_error_object() {
        let resp = ApiResponse::failure("HTTP Error: 500");
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"error": "HTTP Error: 500", "success": false})
        );
        assert_eq!(resp.to_json(), serde_json::to_value(&resp).unwrap());
        assert!(!resp.is_success());
        assert_eq!(resp.error_message(), Some("HTTP Error: 500"));
    }

    #[test]
    fn test_success_serializes_transparently() {
        let body = json!([{"page": 1}, []]);
        let resp = ApiResponse::Success(body.clone());
        assert_eq!(serde_json::to_value(&resp).unwrap(), body);
        assert_eq!(resp.payload(), Some(&body));
    }

    #[test]
    fn test_from_error_result() {
        let result: Result<serde_json::Value, Error> = Err(Error::HttpStatus {
            status: 404,
            body: String::new(),
        });
        assert_eq!(ApiResponse::from(result), ApiResponse::failure("HTTP Error: 404"));
    }

    #[test]
    fn test_api_messages_extracted() {
        let resp = ApiResponse::Success(json!([{
            "message": [{"id": "120", "key": "Invalid value", "value": "The provided parameter value is not valid"}]
        }]));
        let messages = resp.api_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "120");
        assert_eq!(messages[0].key, "Invalid value");
        assert!(resp.parse_page::<serde_json::Value>().is_err());
    }

    #[test]
    fn test_parse_page_on_failure_is_err() {
        let resp = ApiResponse::failure("Exception: boom");
        let err = resp.parse_page::<serde_json::Value>().unwrap_err();
        assert!(err.to_string().contains("Exception: boom"));
        assert!(resp.api_messages().is_empty());
    }
}
