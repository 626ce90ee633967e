//! Remote Collection Gateway
//!
//! Typed HTTP access to the per-entity REST collections. Every collection
//! exposes the same five calls (list/get/create/update/delete); non-2xx
//! responses reject with the server-supplied message when the body carries
//! one.

use std::marker::PhantomData;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use shared::models::{
    Category, Customer, Employee, ExistingLineItem, Inventory, Product, Purchase, Sale, Shipment,
    Transfer, Vehicle, Vendor,
};

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};

/// Gateway to the collection API
#[derive(Clone, Debug)]
pub struct Gateway {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl Gateway {
    /// Create a gateway from configuration, carrying the bearer token on
    /// every request
    pub fn new(config: &ApiConfig, token: Option<String>) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Create a gateway against a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token to all subsequent requests
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn collection<T>(&self, path: &'static str, resource: &'static str) -> Collection<T> {
        Collection {
            gateway: self.clone(),
            path,
            resource,
            _marker: PhantomData,
        }
    }

    // Entity collections

    pub fn vendors(&self) -> Collection<Vendor> {
        self.collection("vendors", "Vendor")
    }

    pub fn products(&self) -> Collection<Product> {
        self.collection("products", "Product")
    }

    pub fn categories(&self) -> Collection<Category> {
        self.collection("categories", "Category")
    }

    pub fn inventories(&self) -> Collection<Inventory> {
        self.collection("inventories", "Inventory")
    }

    pub fn purchases(&self) -> Collection<Purchase> {
        self.collection("purchases", "Purchase")
    }

    pub fn purchase_items(&self) -> Collection<ExistingLineItem> {
        self.collection("purchase-items", "Purchase item")
    }

    pub fn sales(&self) -> Collection<Sale> {
        self.collection("sales", "Sale")
    }

    pub fn sale_items(&self) -> Collection<ExistingLineItem> {
        self.collection("sale-items", "Sale item")
    }

    pub fn transfers(&self) -> Collection<Transfer> {
        self.collection("transfers", "Transfer")
    }

    pub fn transfer_items(&self) -> Collection<ExistingLineItem> {
        self.collection("transfer-items", "Transfer item")
    }

    pub fn shipments(&self) -> Collection<Shipment> {
        self.collection("shipments", "Shipment")
    }

    pub fn shipment_items(&self) -> Collection<ExistingLineItem> {
        self.collection("shipment-items", "Shipment item")
    }

    pub fn vehicles(&self) -> Collection<Vehicle> {
        self.collection("vehicles", "Vehicle")
    }

    pub fn employees(&self) -> Collection<Employee> {
        self.collection("employees", "Employee")
    }

    pub fn customers(&self) -> Collection<Customer> {
        self.collection("customers", "Customer")
    }
}

/// One entity collection with CRUD access
pub struct Collection<T> {
    gateway: Gateway,
    path: &'static str,
    resource: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("gateway", &self.gateway)
            .field("path", &self.path)
            .field("resource", &self.resource)
            .finish()
    }
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            path: self.path,
            resource: self.resource,
            _marker: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> Collection<T> {
    /// The display name used in not-found errors
    pub fn resource(&self) -> &'static str {
        self.resource
    }

    fn url(&self) -> String {
        format!("{}/{}", self.gateway.base_url, self.path)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.gateway.base_url, self.path, id)
    }

    /// Fetch every record in the collection
    pub async fn list(&self) -> ClientResult<Vec<T>> {
        let response = self
            .gateway
            .request(Method::GET, &self.url())
            .send()
            .await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch one record; a 404 is a data-availability condition, not a
    /// failure, so it comes back as `None`
    pub async fn get(&self, id: &str) -> ClientResult<Option<T>> {
        let response = self
            .gateway
            .request(Method::GET, &self.item_url(id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = self.check(response).await?;
        Ok(Some(response.json().await?))
    }

    /// Create a record, returning the server's persisted view of it
    pub async fn create<P: Serialize + ?Sized>(&self, payload: &P) -> ClientResult<T> {
        let response = self
            .gateway
            .request(Method::POST, &self.url())
            .json(payload)
            .send()
            .await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    /// Partially update a record by id
    pub async fn update<P: Serialize + ?Sized>(&self, id: &str, payload: &P) -> ClientResult<T> {
        let response = self
            .gateway
            .request(Method::PUT, &self.item_url(id))
            .json(payload)
            .send()
            .await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    /// Delete a record by id
    pub async fn delete(&self, id: &str) -> ClientResult<bool> {
        let response = self
            .gateway
            .request(Method::DELETE, &self.item_url(id))
            .send()
            .await?;
        self.check(response).await?;
        Ok(true)
    }

    /// Turn a non-2xx response into a typed rejection carrying the
    /// server's message when the body has one
    async fn check(&self, response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body);
        tracing::warn!(
            path = self.path,
            status = status.as_u16(),
            message = %message,
            "collection request rejected"
        );

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized(message));
        }
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pull a human-readable message out of an error body. Servers answer with
/// `{"message": ...}` or `{"error": {"message": ...}}`; anything else falls
/// back to the raw text.
fn server_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
        if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
            return message.to_string();
        }
    }
    body.trim().to_string()
}
