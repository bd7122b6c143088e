//! Shared helpers for account-hex integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;

use demo_types::{
    AccountId, CustomProperties, PaymentInfo, PaymentInfoError, PaymentInfoProvider,
    PropertiesError, PropertiesSource,
};

pub fn fixed_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Answers every lookup with the requested id and a fixed date.
pub struct EchoProvider;

#[async_trait]
impl PaymentInfoProvider for EchoProvider {
    async fn get_payment_info(&self, id: AccountId) -> Result<PaymentInfo, PaymentInfoError> {
        Ok(PaymentInfo::new(id, fixed_date()))
    }
}

/// Fails every lookup with a fresh error from the wrapped constructor.
pub struct FailingProvider(pub fn() -> PaymentInfoError);

#[async_trait]
impl PaymentInfoProvider for FailingProvider {
    async fn get_payment_info(&self, _id: AccountId) -> Result<PaymentInfo, PaymentInfoError> {
        Err((self.0)())
    }
}

/// Properties source backed by a shared value the test can rewrite, or
/// switch to failing.
#[derive(Clone)]
pub struct SharedSource(pub Arc<Mutex<Result<Option<String>, String>>>);

impl SharedSource {
    pub fn new(description: Option<&str>) -> Self {
        Self(Arc::new(Mutex::new(Ok(description.map(String::from)))))
    }

    pub fn set(&self, description: Option<&str>) {
        *self.0.lock().unwrap() = Ok(description.map(String::from));
    }

    /// Makes every following load fail with `message`.
    pub fn fail(&self, message: &str) {
        *self.0.lock().unwrap() = Err(message.to_string());
    }
}

impl PropertiesSource for SharedSource {
    fn load(&self) -> Result<CustomProperties, PropertiesError> {
        match &*self.0.lock().unwrap() {
            Ok(description) => Ok(CustomProperties::new(description.clone())),
            Err(message) => Err(PropertiesError::Unreadable(message.clone())),
        }
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
