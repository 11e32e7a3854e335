//! Edge event envelope: `Records[0].cf.request`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::edge::request::EdgeRequest;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("edge event carries no records")]
    NoRecords,

    #[error("invalid edge event: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Event delivered by the edge platform to a stage handler.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EdgeEvent {
    #[serde(rename = "Records")]
    pub records: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EdgeRecord {
    pub cf: CfPayload,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CfPayload {
    /// Distribution metadata (`distributionId`, `eventType`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,

    pub request: EdgeRequest,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EdgeEvent {
    /// Wrap a bare request in a single-record event.
    pub fn from_request(request: EdgeRequest) -> Self {
        Self {
            records: vec![EdgeRecord {
                cf: CfPayload {
                    config: None,
                    request,
                    extra: Map::new(),
                },
            }],
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The request of the first record.
    pub fn request(&self) -> Result<&EdgeRequest, EventError> {
        self.records
            .first()
            .map(|record| &record.cf.request)
            .ok_or(EventError::NoRecords)
    }

    /// Take the request of the first record.
    pub fn into_request(self) -> Result<EdgeRequest, EventError> {
        self.records
            .into_iter()
            .next()
            .map(|record| record.cf.request)
            .ok_or(EventError::NoRecords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWER_EVENT: &str = r#"{
        "Records": [{
            "cf": {
                "config": {"distributionId": "EDFDVBD6EXAMPLE", "eventType": "viewer-request"},
                "request": {
                    "clientIp": "2001:0db8:85a3::8a2e:0370:7334",
                    "method": "GET",
                    "uri": "/picture.jpg",
                    "querystring": "size=large",
                    "headers": {
                        "host": [{"key": "Host", "value": "d111111abcdef8.cloudfront.net"}],
                        "user-agent": [{"key": "User-Agent", "value": "curl/7.51.0"}]
                    }
                }
            }
        }]
    }"#;

    #[test]
    fn test_parse_viewer_event() {
        let event = EdgeEvent::from_json(VIEWER_EVENT).unwrap();
        let request = event.request().unwrap();
        assert_eq!(request.uri, "/picture.jpg");
        assert_eq!(request.querystring, "size=large");
        assert_eq!(request.headers.first_value("user-agent"), Some("curl/7.51.0"));
        assert_eq!(
            event.records[0].cf.config.as_ref().unwrap()["eventType"],
            "viewer-request"
        );
    }

    #[test]
    fn test_no_records() {
        let event = EdgeEvent::from_json(r#"{"Records": []}"#).unwrap();
        assert!(matches!(event.request(), Err(EventError::NoRecords)));
        assert!(matches!(event.into_request(), Err(EventError::NoRecords)));
    }

    #[test]
    fn test_malformed() {
        let err = EdgeEvent::from_json(r#"{"records": {}}"#).unwrap_err();
        assert!(matches!(err, EventError::Malformed(_)));
    }

    #[test]
    fn test_from_request_roundtrip() {
        let request = EdgeRequest::new("/a", "").with_header("host", "example.com");
        let event = EdgeEvent::from_request(request.clone());
        assert_eq!(event.into_request().unwrap(), request);
    }
}
