//! HTTP Backend
//!
//! `PantryBackend` over reqwest. Works natively and in the browser (reqwest
//! uses `fetch` on wasm32). No timeouts, no retries.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use super::{
    AllergenItemsResponse, CountResponse, HighlightsResponse, ItemQuery, ItemsResponse, PantryBackend, RemoveRequest,
    SuccessResponse,
};
use crate::config::{encode_pairs, ApiConfig};
use crate::domain::{NewItem, NutritionHighlight, RawAllergenItem, RawPantryItem};
use crate::error::FetchError;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn listing_url(&self, query: &ItemQuery) -> String {
        let c = &self.config;
        match query {
            ItemQuery::All => c.url(&c.all_items, &[]),
            ItemQuery::ByStorageTag(tag) => c.url(&c.filter_by_tag, &[("tag", tag.as_str())]),
            ItemQuery::Order { order_id, storage_tag: Some(tag) } => {
                c.url(&c.order_items, &[("order_id", order_id.as_str()), ("storage_tag", tag.as_str())])
            }
            ItemQuery::Order { order_id, storage_tag: None } => c.url(&c.order_items, &[("order_id", order_id.as_str())]),
            ItemQuery::Search(term) => c.url(&c.search, &[("q", term.as_str())]),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        log::debug!("[Http] GET {}", url);
        let response = self.client.get(&url).send().await?;
        decode(check_status(response)?).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, FetchError> {
        let url = self.config.url(path, &[]);
        log::debug!("[Http] POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        decode(check_status(response)?).await
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown status").to_string(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait(?Send)]
impl PantryBackend for HttpBackend {
    async fn list_items(&self, query: &ItemQuery) -> Result<Vec<RawPantryItem>, FetchError> {
        let response: ItemsResponse = self.get_json(self.listing_url(query)).await?;
        Ok(response.items)
    }

    async fn add_item(&self, item: &NewItem) -> Result<(), FetchError> {
        let response: SuccessResponse = self.post_json(&self.config.add_item, item).await?;
        response.into_result().map(|_| ())
    }

    async fn remove_item(&self, request: &RemoveRequest) -> Result<String, FetchError> {
        let response: SuccessResponse = self.post_json(&self.config.remove_item, request).await?;
        response.into_result()
    }

    async fn list_allergen_items(&self) -> Result<Vec<RawAllergenItem>, FetchError> {
        let c = &self.config;
        let response: AllergenItemsResponse = self.get_json(c.url(&c.allergen_items, &[])).await?;
        Ok(response.items)
    }

    async fn add_allergen(&self, allergen: &str) -> Result<(), FetchError> {
        let response: SuccessResponse = self.post_json(&self.config.add_allergen, &json!({ "allergen": allergen })).await?;
        response.into_result().map(|_| ())
    }

    async fn remove_allergen(&self, allergen: &str) -> Result<(), FetchError> {
        let response: SuccessResponse = self
            .post_json(&self.config.remove_allergen, &json!({ "allergen": allergen }))
            .await?;
        response.into_result().map(|_| ())
    }

    async fn extend_warranty(&self, product_name: &str, cost: f64) -> Result<(), FetchError> {
        let body = json!({ "product_name": product_name, "cost": cost });
        let response: SuccessResponse = self.post_json(&self.config.extend_warranty, &body).await?;
        response.into_result().map(|_| ())
    }

    async fn cart_count(&self) -> Result<u32, FetchError> {
        let c = &self.config;
        let response: CountResponse = self.get_json(c.url(&c.cart_count, &[])).await?;
        Ok(response.count.clamp(0, u32::MAX as i64) as u32)
    }

    async fn add_to_cart(&self, product_name: &str, quantity: u32) -> Result<(), FetchError> {
        let url = self.config.url(&self.config.add_to_cart, &[]);
        let quantity = quantity.to_string();
        let body = encode_pairs(&[("product_name", product_name), ("quantity", quantity.as_str())]);
        log::debug!("[Http] POST {} (form)", url);
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;
        // success is signalled by status alone
        check_status(response).map(|_| ())
    }

    async fn nutrition_highlights(&self) -> Result<Vec<NutritionHighlight>, FetchError> {
        let c = &self.config;
        let response: HighlightsResponse = self.get_json(c.url(&c.nutrition_highlights, &[])).await?;
        Ok(response.highlights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fetch_items;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve one canned response; the raw request comes back on the channel
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.expect("read");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.expect("write");
            socket.shutdown().await.ok();
            let _ = tx.send(String::from_utf8_lossy(&request).to_string());
        });
        (format!("http://{}", addr), rx)
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
            })
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    #[tokio::test]
    async fn test_listing_is_normalized() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"items":[{"product_name":"Milk","quantity":"NaN","expiry_date":"2024-01-01"},{"product_name":"NaN"}]}"#,
        )
        .await;
        let backend = HttpBackend::new(ApiConfig::with_base_url(base));
        let items = fetch_items(&backend, &ItemQuery::All).await.expect("items");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 0.0);
        assert_eq!(items[1].product_name, "Unknown Product");
        assert!(request.await.unwrap().starts_with("GET /pantry/all_items "));
    }

    #[tokio::test]
    async fn test_non_success_status_is_distinguishable() {
        let (base, _request) = serve_once("503 Service Unavailable", "{}").await;
        let backend = HttpBackend::new(ApiConfig::with_base_url(base));
        let err = backend.list_items(&ItemQuery::Search("milk".to_string())).await.unwrap_err();
        assert_eq!(err, FetchError::Status { status: 503, message: "Service Unavailable".to_string() });
    }

    #[tokio::test]
    async fn test_missing_items_key_is_empty() {
        let (base, _request) = serve_once("200 OK", "{}").await;
        let backend = HttpBackend::new(ApiConfig::with_base_url(base));
        assert!(backend.list_items(&ItemQuery::All).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let (base, _request) = serve_once("200 OK", "<html>oops</html>").await;
        let backend = HttpBackend::new(ApiConfig::with_base_url(base));
        assert!(matches!(backend.cart_count().await, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_remove_posts_product_name() {
        let (base, request) = serve_once("200 OK", r#"{"success":false,"message":"Item Tea not found in pantry"}"#).await;
        let backend = HttpBackend::new(ApiConfig::with_base_url(base));
        let err = backend
            .remove_item(&RemoveRequest { product_name: "Tea".to_string(), id: None })
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::Rejected("Item Tea not found in pantry".to_string()));
        let request = request.await.unwrap();
        assert!(request.starts_with("POST /pantry/remove_item "));
        assert!(request.ends_with(r#"{"product_name":"Tea"}"#));
    }

    #[tokio::test]
    async fn test_add_to_cart_is_form_encoded() {
        let (base, request) = serve_once("200 OK", "").await;
        let backend = HttpBackend::new(ApiConfig::with_base_url(base));
        backend.add_to_cart("Oat Milk", 1).await.expect("added");
        let request = request.await.unwrap();
        assert!(request.to_ascii_lowercase().contains("content-type: application/x-www-form-urlencoded"));
        assert!(request.ends_with("product_name=Oat%20Milk&quantity=1"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let backend = HttpBackend::new(ApiConfig::with_base_url(format!("http://{}", addr)));
        assert!(matches!(backend.cart_count().await, Err(FetchError::Network(_))));
    }
}
