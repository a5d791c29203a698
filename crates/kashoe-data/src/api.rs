//! Typed endpoints of the club backend.

use crate::{FetchClient, FetchError};
use async_trait::async_trait;
use kashoe_commerce::catalog::{ClubEvent, EventStatus, NewEvent, NewProduct, Product, ProductCategory};
use kashoe_commerce::checkout::{
    ClubGateway, ContactMessage, ContactSubmission, LessonRegistration,
    LessonRegistrationRequest, NewsletterSignup, NewsletterSubscription, Order, OrderRequest,
};
use kashoe_commerce::ids::{EventId, ProductId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Path every endpoint lives under.
pub const API_PREFIX: &str = "/api";

/// Body of `GET /api/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
    pub status: String,
}

impl HealthStatus {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// Client for the club REST API.
#[derive(Debug, Clone)]
pub struct ClubApi {
    client: FetchClient,
}

impl ClubApi {
    /// Client for the backend at `backend_url` (scheme and host, no `/api`).
    pub fn new(backend_url: &str) -> Self {
        let base = format!("{}{}", backend_url.trim_end_matches('/'), API_PREFIX);
        Self {
            client: FetchClient::new()
                .with_base_url(base)
                .with_default_header("Accept", "application/json"),
        }
    }

    /// Abort requests after `timeout` (native builds only).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.with_timeout(timeout);
        self
    }

    /// Underlying HTTP client, already pointed at the API base.
    pub fn client(&self) -> &FetchClient {
        &self.client
    }

    /// Base URL including the `/api` prefix.
    pub fn base_url(&self) -> &str {
        self.client.base_url().unwrap_or(API_PREFIX)
    }

    /// `GET /`
    pub async fn health(&self) -> Result<HealthStatus, FetchError> {
        self.get_json("/", &[]).await
    }

    /// `GET /products`, optionally narrowed to one category.
    pub async fn products(
        &self,
        category: Option<ProductCategory>,
    ) -> Result<Vec<Product>, FetchError> {
        let query: Vec<(&str, &str)> = category.iter().map(|c| ("category", c.as_str())).collect();
        self.get_json("/products", &query).await
    }

    /// `GET /products/{id}`
    pub async fn product(&self, id: &ProductId) -> Result<Product, FetchError> {
        self.get_json(&format!("/products/{}", id), &[]).await
    }

    /// `POST /products`
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, FetchError> {
        self.post_json("/products", product).await
    }

    /// `GET /events`, optionally narrowed to one status.
    pub async fn events(&self, status: Option<EventStatus>) -> Result<Vec<ClubEvent>, FetchError> {
        let query: Vec<(&str, &str)> = status.iter().map(|s| ("status", s.as_str())).collect();
        self.get_json("/events", &query).await
    }

    /// `GET /events/{id}`
    pub async fn event(&self, id: &EventId) -> Result<ClubEvent, FetchError> {
        self.get_json(&format!("/events/{}", id), &[]).await
    }

    /// `POST /events`
    pub async fn create_event(&self, event: &NewEvent) -> Result<ClubEvent, FetchError> {
        self.post_json("/events", event).await
    }

    /// `POST /orders`
    ///
    /// Any 2xx is an accepted order; the stored order is returned when the
    /// reply carries one.
    pub async fn create_order(&self, order: &OrderRequest) -> Result<Option<Order>, FetchError> {
        self.submit("/orders", order).await
    }

    /// `POST /contact`
    pub async fn send_contact(
        &self,
        message: &ContactMessage,
    ) -> Result<Option<ContactSubmission>, FetchError> {
        self.submit("/contact", message).await
    }

    /// `POST /lessons/register`
    pub async fn register_lesson(
        &self,
        registration: &LessonRegistrationRequest,
    ) -> Result<Option<LessonRegistration>, FetchError> {
        self.submit("/lessons/register", registration).await
    }

    /// `POST /newsletter/subscribe`
    pub async fn subscribe_newsletter(
        &self,
        signup: &NewsletterSignup,
    ) -> Result<Option<NewsletterSubscription>, FetchError> {
        self.submit("/newsletter/subscribe", signup).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let mut request = self.client.get(path);
        for (key, value) in query {
            request = request.query(*key, *value);
        }
        request.send().await?.error_for_status()?.json()
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.client
            .post(path)
            .json(body)?
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    /// POST a user submission. Only transport failures and non-2xx statuses
    /// are errors; the reply body is decoded if possible.
    async fn submit<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(path).json(body)?.send().await?.error_for_status()?;
        Ok(response.json_opt())
    }
}

#[async_trait(?Send)]
impl ClubGateway for ClubApi {
    type Error = FetchError;

    async fn place_order(&self, order: &OrderRequest) -> Result<Option<Order>, FetchError> {
        self.create_order(order).await
    }

    async fn send_contact(
        &self,
        message: &ContactMessage,
    ) -> Result<Option<ContactSubmission>, FetchError> {
        ClubApi::send_contact(self, message).await
    }

    async fn register_lesson(
        &self,
        registration: &LessonRegistrationRequest,
    ) -> Result<Option<LessonRegistration>, FetchError> {
        ClubApi::register_lesson(self, registration).await
    }

    async fn subscribe_newsletter(
        &self,
        signup: &NewsletterSignup,
    ) -> Result<Option<NewsletterSubscription>, FetchError> {
        ClubApi::subscribe_newsletter(self, signup).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url() {
        assert_eq!(ClubApi::new("https://kashoe.example/").base_url(), "https://kashoe.example/api");
        assert_eq!(ClubApi::new("").base_url(), "/api");
    }

    #[test]
    fn test_endpoint_urls() {
        let api = ClubApi::new("http://localhost:8001");
        assert_eq!(api.client().get("/lessons/register").url(), "http://localhost:8001/api/lessons/register");
        assert_eq!(
            api.client().get(format!("/products/{}", ProductId::new("b7c1"))).url(),
            "http://localhost:8001/api/products/b7c1"
        );
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"message": "Kashoe Chess Club API", "status": "active"}"#).unwrap();
        assert!(health.is_active());
    }

    #[tokio::test]
    async fn test_gateway_failure_surfaces_as_error() {
        use kashoe_commerce::cart::{CartProduct, CartState};
        use kashoe_commerce::checkout::{place_order, CheckoutForm, SubmitError, ORDER_FAILED};
        use kashoe_commerce::money::Money;
        use std::cell::RefCell;

        let api = ClubApi::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(5));
        let mut cart = CartState::new();
        cart.add_item(CartProduct::new("1", "Board", Money::from_decimal(3500.0)), 1);
        let cart = RefCell::new(cart);
        let mut form = CheckoutForm {
            customer_name: "Amina".into(),
            customer_email: "amina@example.com".into(),
            customer_phone: "254712345678".into(),
        };

        let err = place_order(&api, &mut form, &cart).await.unwrap_err();
        assert_eq!(err, SubmitError::Failed(ORDER_FAILED));
        assert_eq!(cart.borrow().count(), 1);
    }

    /// Serve one canned HTTP reply on a local port; returns the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            // Read the headers, then as much body as Content-Length announces.
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
            }
            let reply = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{addr}")
    }

    fn one_board_checkout() -> (
        std::cell::RefCell<kashoe_commerce::cart::CartState>,
        kashoe_commerce::checkout::CheckoutForm,
    ) {
        use kashoe_commerce::cart::{CartProduct, CartState};
        use kashoe_commerce::money::Money;

        let mut cart = CartState::new();
        cart.add_item(CartProduct::new("1", "Board", Money::from_decimal(3500.0)), 1);
        let form = kashoe_commerce::checkout::CheckoutForm {
            customer_name: "Amina".into(),
            customer_email: "amina@example.com".into(),
            customer_phone: "254712345678".into(),
        };
        (std::cell::RefCell::new(cart), form)
    }

    #[tokio::test]
    async fn test_created_without_order_body_clears_cart() {
        use kashoe_commerce::checkout::{place_order, ORDER_PLACED};

        let base = serve_once("201 Created", r#"{"message":"Order received"}"#).await;
        let api = ClubApi::new(&base).with_timeout(Duration::from_secs(5));
        let (cart, mut form) = one_board_checkout();

        let outcome = place_order(&api, &mut form, &cart).await.unwrap();
        assert!(outcome.record.is_none());
        assert_eq!(outcome.message, ORDER_PLACED);
        assert!(cart.borrow().is_empty());
        assert!(form.customer_name.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_keeps_cart() {
        use kashoe_commerce::checkout::{place_order, SubmitError, ORDER_FAILED};

        let base = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;
        let api = ClubApi::new(&base).with_timeout(Duration::from_secs(5));
        let (cart, mut form) = one_board_checkout();

        let err = place_order(&api, &mut form, &cart).await.unwrap_err();
        assert_eq!(err, SubmitError::Failed(ORDER_FAILED));
        assert_eq!(cart.borrow().count(), 1);
        assert_eq!(form.customer_name, "Amina");
    }
}
