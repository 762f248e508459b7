//! Minimal HTTP client abstraction so the lookup client can run over any transport.

use std::fmt::Display;
use std::future::Future;

use crate::error::TransportError;

/// HTTP client trait for sending raw HTTP requests.
///
/// Implemented for `reqwest::Client` with the `reqwest-client` feature.
/// Tests and custom transports implement it directly.
#[cfg_attr(not(target_arch = "wasm32"), trait_variant::make(Send))]
pub trait HttpClient {
    /// Error type returned by the HTTP client
    type Error: std::error::Error + Display + Send + Sync + 'static;

    /// Send an HTTP request and return the response.
    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl Future<Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>>;

    /// Classify a failed send.
    ///
    /// Transports that can tell timeouts and refused connections apart
    /// override this; everything else lands in [`TransportError::Other`].
    fn transport_error(error: Self::Error) -> TransportError {
        TransportError::Other(Box::new(error))
    }
}

#[cfg(feature = "reqwest-client")]
impl HttpClient for reqwest::Client {
    type Error = reqwest::Error;

    async fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> core::result::Result<http::Response<Vec<u8>>, Self::Error> {
        let (parts, body) = request.into_parts();

        let mut req = self.request(parts.method, parts.uri.to_string()).body(body);
        for (name, value) in parts.headers.iter() {
            req = req.header(name.as_str(), value.as_bytes());
        }

        let resp = req.send().await?;

        let mut builder = http::Response::builder().status(resp.status());
        for (name, value) in resp.headers().iter() {
            builder = builder.header(name.as_str(), value.as_bytes());
        }

        let body = resp.bytes().await?.to_vec();

        // status and headers were copied from a response that already parsed
        Ok(builder.body(body).expect("Failed to build response"))
    }

    fn transport_error(error: Self::Error) -> TransportError {
        error.into()
    }
}
