//! REST API helpers for communicating with the vehicles API.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: the transport reports a failure since the endpoint is only
//! reachable from the page's own origin.
//!
//! ERROR HANDLING
//! ==============
//! Only the response status is consumed. Anything that prevents a response
//! (network down, CORS, bad body) becomes a `TransportError`, which the form
//! renders as "Error submitting form.".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use vehicles::{TransportError, VehiclePayload, VehicleTransport};

#[cfg(any(test, feature = "csr"))]
fn create_vehicle_endpoint() -> &'static str {
    vehicles::VEHICLES_ENDPOINT
}

#[cfg(any(test, feature = "csr"))]
fn encode_failed_message(detail: &str) -> String {
    format!("could not encode vehicle: {detail}")
}

/// Same-origin transport used by the Vehicle Manager page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl VehicleTransport for BrowserTransport {
    async fn create_vehicle(&self, payload: &VehiclePayload) -> Result<u16, TransportError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(create_vehicle_endpoint())
                .json(payload)
                .map_err(|e| TransportError::new(encode_failed_message(&e.to_string())))?
                .send()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;
            Ok(resp.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            Err(TransportError::new("not available outside the browser"))
        }
    }
}
