/*
[INPUT]:  Endpoint path, query pairs and optional JSON body
[OUTPUT]: Decoded payloads for arbitrary endpoints, one helper per HTTP verb
[POS]:    HTTP layer - generic verb helpers below the typed wrappers
[UPDATE]: When the service adds verbs or changes accepted statuses
*/

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::client::{RawResponse, path_segments};
use crate::http::decode::EXPECT_OK;
use crate::http::{Result, XfighterClient};

impl XfighterClient {
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let builder = self.request_builder(Method::GET, &path_segments(path), query)?;
        self.send_json(builder, EXPECT_OK).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request_builder(Method::DELETE, &path_segments(path), &[])?;
        self.send_json(builder, EXPECT_OK).await
    }

    pub async fn options<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request_builder(Method::OPTIONS, &path_segments(path), &[])?;
        self.send_json(builder, EXPECT_OK).await
    }

    /// HEAD responses carry no body, so the raw response is returned as is.
    pub async fn head(&self, path: &str) -> Result<RawResponse> {
        let builder = self.request_builder(Method::HEAD, &path_segments(path), &[])?;
        self.send_raw(builder).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_with_body(Method::POST, path, body).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_with_body(Method::PUT, path, body).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_with_body(Method::PATCH, path, body).await
    }

    async fn send_with_body<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request_builder(method, &path_segments(path), &[])?
            .json(body);
        self.send_json(builder, EXPECT_OK).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, XfighterClient, XfighterError};
    use serde_json::{Value, json};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> XfighterClient {
        XfighterClient::with_config_and_base_url(ClientConfig::new("test-key"), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_put_sends_json_body_and_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/things/1"))
            .and(header("X-Starfighter-Authorization", "test-key"))
            .and(body_json(json!({"name": "widget"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response: Value = client
            .put("things/1", &json!({"name": "widget"}))
            .await
            .expect("put failed");

        assert_eq!(response["id"], 1);
    }

    #[tokio::test]
    async fn test_patch_maps_ok_false() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/things/1"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"ok": false, "error": "bad field"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .patch::<Value, _>("things/1", &json!({"name": 7}))
            .await
            .unwrap_err();

        assert_eq!(err.service_message(), Some("bad field"));
    }

    #[tokio::test]
    async fn test_head_returns_raw_status() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/heartbeat"))
            .respond_with(ResponseTemplate::new(204).insert_header("x-venue-state", "open"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let raw = client.head("/heartbeat").await.expect("head failed");

        assert_eq!(raw.status.as_u16(), 204);
        assert!(raw.body.is_empty());
        assert_eq!(
            raw.headers.get("x-venue-state").and_then(|value| value.to_str().ok()),
            Some("open")
        );
    }

    #[tokio::test]
    async fn test_options_and_delete_decode() {
        let server = MockServer::start().await;
        Mock::given(method("OPTIONS"))
            .and(path("/things"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/things/2"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options: Value = client.options("things").await.expect("options failed");
        assert_eq!(options["ok"], true);

        let err = client.delete::<Value>("things/2").await.unwrap_err();
        assert!(matches!(err, XfighterError::InvalidJson { ref body } if body == "upstream unavailable"));
    }

    #[tokio::test]
    async fn test_raw_request_leaves_status_uninterpreted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(body_json(json!({"a": 1})))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let raw = client
            .request(reqwest::Method::POST, "echo", &[], Some(&json!({"a": 1})))
            .await
            .expect("transport should succeed");

        assert_eq!(raw.status.as_u16(), 500);
        assert_eq!(raw.body, "boom");
    }
}
