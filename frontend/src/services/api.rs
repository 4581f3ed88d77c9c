use async_trait::async_trait;
use gloo::net::http::Request;
use shared::{
    ApiError, BookedDatesResponse, BookingApi, CheckoutSessionRequest, CheckoutSessionResponse,
};

use crate::config::CalendarConfig;

/// API client for the availability and checkout endpoints
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    booked_dates_url: String,
    checkout_url: String,
}

impl ApiClient {
    pub fn new(config: &CalendarConfig) -> Self {
        Self {
            booked_dates_url: config.booked_dates_url.clone(),
            checkout_url: config.checkout_url.clone(),
        }
    }
}

#[async_trait(?Send)]
impl BookingApi for ApiClient {
    async fn booked_dates(&self) -> Result<BookedDatesResponse, ApiError> {
        let response = Request::get(&self.booked_dates_url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            log::warn!("Booked dates endpoint returned HTTP {}", response.status());
        }

        response
            .json::<BookedDatesResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The backend reports failures as a JSON `{error}` body with a 5xx
    /// status, so the body is decoded whatever the status code.
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<Option<CheckoutSessionResponse>, ApiError> {
        let response = Request::post(&self.checkout_url)
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            log::warn!("Checkout endpoint returned HTTP {}", response.status());
        }

        response
            .json::<Option<CheckoutSessionResponse>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
