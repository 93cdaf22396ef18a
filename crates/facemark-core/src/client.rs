//! HTTP client for the remote face-detection service.
//!
//! Wire contract: the raw image bytes are POSTed as
//! `application/octet-stream` with the subscription key in a request
//! header; the service answers with a JSON array of faces, each carrying a
//! `faceRectangle` object.

use crate::types::DetectedFace;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Request, StatusCode, Url};
use thiserror::Error;

/// Header carrying the detection service credential.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("could not build detection request: {0}")]
    RequestBuild(String),
    #[error("detection request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("detection service returned {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },
    #[error("malformed detection response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client bound to one detection endpoint and credential.
///
/// Uses the HTTP library's default timeout and TLS settings. Each call makes
/// a single attempt; there is no retry.
pub struct DetectionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl DetectionClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a request carrying `image_bytes` as its body.
    ///
    /// Fails with [`ClientError::RequestBuild`] if `url` does not parse or the
    /// key cannot be sent as a header value.
    pub fn build_request(
        &self,
        method: Method,
        url: &str,
        image_bytes: Vec<u8>,
        api_key: &str,
    ) -> Result<Request, ClientError> {
        let url = Url::parse(url)
            .map_err(|e| ClientError::RequestBuild(format!("invalid endpoint URL {url:?}: {e}")))?;
        let key = HeaderValue::from_str(api_key)
            .map_err(|e| ClientError::RequestBuild(format!("invalid API key header value: {e}")))?;

        self.http
            .request(method, url)
            .header(CONTENT_TYPE, OCTET_STREAM)
            .header(SUBSCRIPTION_KEY_HEADER, key)
            .body(image_bytes)
            .build()
            .map_err(|e| ClientError::RequestBuild(e.to_string()))
    }

    /// Issue `request` once and return the response body.
    ///
    /// Any non-2xx status is an error carrying the status and whatever body
    /// the service sent back, so auth failures and rate limits never reach
    /// the JSON parser.
    pub async fn send(&self, request: Request) -> Result<Vec<u8>, ClientError> {
        let response = self.http.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "detection service rejected request");
            return Err(ClientError::HttpStatus { status, body });
        }

        let body = response.bytes().await?;
        tracing::debug!(%status, len = body.len(), "detection response received");
        Ok(body.to_vec())
    }

    /// Send `image_bytes` to the configured endpoint and parse the faces found.
    pub async fn detect(&self, image_bytes: Vec<u8>) -> Result<Vec<DetectedFace>, ClientError> {
        let request = self.build_request(Method::POST, &self.endpoint, image_bytes, &self.api_key)?;
        tracing::info!(endpoint = %self.endpoint, "sending detection request");

        let body = self.send(request).await?;
        let faces = parse_faces(&body)?;
        tracing::info!(faces = faces.len(), "faces detected");
        Ok(faces)
    }
}

/// Deserialize a detection response body into faces, preserving order.
///
/// `[]` is a valid response meaning no faces were found.
pub fn parse_faces(body: &[u8]) -> Result<Vec<DetectedFace>, ClientError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FaceRectangle;

    fn client() -> DetectionClient {
        DetectionClient::new("https://faces.example.com/detect", "secret")
    }

    #[test]
    fn test_parse_empty_array() {
        let faces = parse_faces(b"[]").unwrap();
        assert!(faces.is_empty());
    }

    #[test]
    fn test_parse_single_face() {
        let body = br#"[{"faceRectangle":{"width":20,"height":20,"left":10,"top":10}}]"#;
        let faces = parse_faces(body).unwrap();
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].face_rectangle, FaceRectangle::new(10, 10, 20, 20));
    }

    #[test]
    fn test_parse_preserves_order() {
        let body = br#"[
            {"faceRectangle":{"width":1,"height":1,"left":5,"top":5}},
            {"faceRectangle":{"width":2,"height":2,"left":0,"top":0}}
        ]"#;
        let faces = parse_faces(body).unwrap();
        assert_eq!(faces[0].face_rectangle.left, 5);
        assert_eq!(faces[1].face_rectangle.left, 0);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let body = br#"[{
            "faceId": "c5c24a82-6845-4031-9d5d-978df9175426",
            "faceRectangle": {"width": 78, "height": 78, "left": 394, "top": 54, "extra": 1},
            "faceAttributes": {"age": 71.0}
        }]"#;
        let faces = parse_faces(body).unwrap();
        assert_eq!(faces[0].face_rectangle, FaceRectangle::new(394, 54, 78, 78));
    }

    #[test]
    fn test_parse_truncated_body() {
        let body = br#"[{"faceRectangle":{"width":20,"hei"#;
        assert!(matches!(parse_faces(body), Err(ClientError::Parse(_))));
    }

    #[test]
    fn test_parse_missing_rectangle() {
        let body = br#"[{"faceId":"abc"}]"#;
        assert!(matches!(parse_faces(body), Err(ClientError::Parse(_))));
    }

    #[test]
    fn test_parse_missing_rectangle_field() {
        let body = br#"[{"faceRectangle":{"width":20,"height":20,"left":10}}]"#;
        assert!(matches!(parse_faces(body), Err(ClientError::Parse(_))));
    }

    #[test]
    fn test_parse_error_object_is_not_a_face_list() {
        let body = br#"{"error":{"code":"401","message":"Access denied"}}"#;
        assert!(matches!(parse_faces(body), Err(ClientError::Parse(_))));
    }

    #[test]
    fn test_build_request_sets_wire_contract() {
        let request = client()
            .build_request(
                Method::POST,
                "https://faces.example.com/detect?returnFaceId=false",
                vec![1, 2, 3],
                "secret",
            )
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().query(), Some("returnFaceId=false"));
        assert_eq!(request.headers()[CONTENT_TYPE], OCTET_STREAM);
        assert_eq!(request.headers()[SUBSCRIPTION_KEY_HEADER], "secret");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, &[1, 2, 3]);
    }

    #[test]
    fn test_build_request_rejects_malformed_url() {
        let result = client().build_request(Method::POST, "not a url", vec![], "secret");
        assert!(matches!(result, Err(ClientError::RequestBuild(_))));
    }

    #[test]
    fn test_build_request_rejects_empty_url() {
        let result = client().build_request(Method::POST, "", vec![], "secret");
        assert!(matches!(result, Err(ClientError::RequestBuild(_))));
    }

    #[test]
    fn test_build_request_rejects_bad_header_value() {
        let result = client().build_request(
            Method::POST,
            "https://faces.example.com/detect",
            vec![],
            "line\nbreak",
        );
        assert!(matches!(result, Err(ClientError::RequestBuild(_))));
    }
}
