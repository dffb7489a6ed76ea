pub mod transaction;
pub mod upload;

use common::{ApiEnvelope, ApiError, ErrorEnvelope};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use web_sys::AbortController;
use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Aborts the request it is attached to once the configured timeout elapses.
///
/// Dropping the guard disarms the timer.
struct RequestTimeout {
    _timer: Option<Timeout>,
}

impl RequestTimeout {
    fn arm(builder: RequestBuilder) -> (RequestBuilder, Self) {
        let timeout_ms = settings::get_settings().request_timeout_ms;
        match AbortController::new() {
            Ok(controller) if timeout_ms > 0 => {
                let builder = builder.abort_signal(Some(&controller.signal()));
                let timer = Timeout::new(timeout_ms, move || {
                    log::warn!("Request exceeded {}ms, aborting", timeout_ms);
                    controller.abort();
                });
                (builder, Self { _timer: Some(timer) })
            }
            _ => (builder, Self { _timer: None }),
        }
    }
}

fn network_error(method: &str, endpoint: &str, err: gloo_net::Error) -> ApiError {
    let err = ApiError::Network(err.to_string());
    log::error!("{} {} - {}", method, endpoint, err);
    err
}

/// Unwraps the `{status, data}` envelope or converts the error envelope.
async fn parse_response<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let status = response.status();
    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
        return Err(match response.json::<ErrorEnvelope>().await {
            Ok(envelope) => ApiError::from_envelope(status, envelope),
            Err(_) => ApiError::from_status(status),
        });
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let envelope: ApiEnvelope<T> = response.json().await.map_err(|e| {
        let err = ApiError::Decode(e.to_string());
        log::error!("{} {} - {}", method, endpoint, err);
        err
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(envelope.data)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str, params: &[(&str, String)]) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {} {:?}", url, params);

    let builder = Request::get(&url).query(params.iter().map(|(key, value)| (*key, value.as_str())));
    let (builder, _timeout) = RequestTimeout::arm(builder);
    let response = builder
        .send()
        .await
        .map_err(|e| network_error("GET", endpoint, e))?;

    parse_response("GET", endpoint, response).await
}

/// Multipart POST request handler
pub async fn post_form<T>(endpoint: &str, form: web_sys::FormData) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST (multipart) request to: {}", url);

    let (builder, _timeout) = RequestTimeout::arm(Request::post(&url));
    let response = builder
        .body(form)
        .map_err(|e| network_error("POST", endpoint, e))?
        .send()
        .await
        .map_err(|e| network_error("POST", endpoint, e))?;

    parse_response("POST", endpoint, response).await
}

/// Checks that the backend answers on its health endpoint.
pub async fn health_check() -> Result<(), ApiError> {
    let url = format!("{}/health", api_base());
    let (builder, _timeout) = RequestTimeout::arm(Request::get(&url));
    let response = builder
        .send()
        .await
        .map_err(|e| network_error("GET", "/health", e))?;

    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::from_status(response.status()))
    }
}
