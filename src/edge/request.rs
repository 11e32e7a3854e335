//! The request value both stages operate on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::edge::headers::Headers;

/// One HTTP request as carried by the edge event.
///
/// Fields neither stage touches (`method`, `clientIp`, ...) are kept in
/// `extra` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct EdgeRequest {
    pub uri: String,

    #[serde(default)]
    pub querystring: String,

    #[serde(default)]
    pub headers: Headers,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EdgeRequest {
    pub fn new(uri: impl Into<String>, querystring: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            querystring: querystring.into(),
            ..Default::default()
        }
    }

    /// Builder-style header insertion.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }
}

/// Origin override. Only the custom variant is modelled; other kinds
/// (e.g. `s3`) pass through as raw JSON.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Origin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomOrigin>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Origin {
    pub fn custom(custom: CustomOrigin) -> Self {
        Self {
            custom: Some(custom),
            other: Map::new(),
        }
    }
}

/// Custom origin descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrigin {
    pub protocol: String,
    pub domain_name: String,
    pub port: u16,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub ssl_protocols: Vec<String>,
    pub read_timeout: u32,
    pub keepalive_timeout: u32,
    #[serde(default)]
    pub custom_headers: Headers,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_survive() {
        let raw = json!({
            "clientIp": "203.0.113.178",
            "method": "GET",
            "uri": "/product/42",
            "querystring": "",
            "headers": {"host": [{"key": "Host", "value": "shop.example.com"}]}
        });

        let request: EdgeRequest = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(request.uri, "/product/42");
        assert!(request.origin.is_none());
        assert_eq!(request.extra["method"], "GET");

        assert_eq!(serde_json::to_value(&request).unwrap(), raw);
    }

    #[test]
    fn test_custom_origin_shape() {
        let origin = Origin::custom(CustomOrigin {
            protocol: "https".into(),
            domain_name: "render.example.com".into(),
            port: 443,
            path: String::new(),
            ssl_protocols: vec!["TLSv1.1".into(), "TLSv1.2".into()],
            read_timeout: 30,
            keepalive_timeout: 30,
            custom_headers: Headers::new(),
        });

        assert_eq!(
            serde_json::to_value(&origin).unwrap(),
            json!({
                "custom": {
                    "protocol": "https",
                    "domainName": "render.example.com",
                    "port": 443,
                    "path": "",
                    "sslProtocols": ["TLSv1.1", "TLSv1.2"],
                    "readTimeout": 30,
                    "keepaliveTimeout": 30,
                    "customHeaders": {}
                }
            })
        );
    }

    #[test]
    fn test_s3_origin_passthrough() {
        let raw = json!({"s3": {"domainName": "bucket.s3.amazonaws.com", "path": ""}});
        let origin: Origin = serde_json::from_value(raw.clone()).unwrap();
        assert!(origin.custom.is_none());
        assert_eq!(serde_json::to_value(&origin).unwrap(), raw);
    }
}
