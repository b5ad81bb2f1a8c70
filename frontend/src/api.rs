//! HTTP calls to the PinyImage backend.
//!
//! Every function takes the `RequestContext` explicitly and copies its
//! identity headers onto that one request. Nothing is installed as a default
//! on a shared client.

use common::api::{
    is_success, ApiConfig, ApiError, RequestContext, ANALYZE_PATH, CARDS_PATH, SAVE_PATH,
    STATUS_PATH,
};
use common::model::analysis::AnalysisResponse;
use common::model::card::Card;
use common::model::status::BackendStatus;
use common::requests::{AnalysisRequest, NewCardRequest};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

fn with_identity(builder: RequestBuilder, context: &RequestContext) -> RequestBuilder {
    context
        .headers()
        .into_iter()
        .fold(builder, |builder, (name, value)| builder.header(name, &value))
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Turns a non-2xx response into `ApiError::Status`, keeping the body for the log.
async fn checked(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if is_success(status) {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status,
            body: response.text().await.unwrap_or_default(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// `GET /api/cards`
pub async fn fetch_cards(config: &ApiConfig, context: &RequestContext) -> Result<Vec<Card>, ApiError> {
    let response = with_identity(Request::get(&config.url(CARDS_PATH)), context)
        .send()
        .await
        .map_err(network)?;
    decode(checked(response).await?).await
}

/// `POST /api/result`
pub async fn analyze(
    config: &ApiConfig,
    context: &RequestContext,
    input: String,
) -> Result<AnalysisResponse, ApiError> {
    let body = AnalysisRequest { user_input: input };
    let response = with_identity(Request::post(&config.url(ANALYZE_PATH)), context)
        .json(&body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(checked(response).await?).await
}

/// `POST /api/post`. Success carries no body we rely on.
pub async fn save_card(
    config: &ApiConfig,
    context: &RequestContext,
    card: &NewCardRequest,
) -> Result<(), ApiError> {
    let response = with_identity(Request::post(&config.url(SAVE_PATH)), context)
        .json(card)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    checked(response).await.map(|_| ())
}

/// `GET /api/status`
pub async fn fetch_status(config: &ApiConfig) -> Result<BackendStatus, ApiError> {
    let response = Request::get(&config.url(STATUS_PATH))
        .send()
        .await
        .map_err(network)?;
    decode(checked(response).await?).await
}
