//! Axum hosting

use crate::{ContactRelay, Invocation, RelayResponse, ResponseBody};
use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    response::{IntoResponse, Json, Response},
    routing::any,
    Router,
};
use std::sync::Arc;

pub const ROUTE: &str = "/send-mail";

/// Router exposing the relay. Every method reaches the handler so that
/// non-POST requests get the relay's own 405.
pub fn router(relay: Arc<ContactRelay>) -> Router {
    Router::new()
        .route(ROUTE, any(send_mail))
        .with_state(relay)
}

async fn send_mail(
    State(relay): State<Arc<ContactRelay>>,
    method: Method,
    body: Bytes,
) -> RelayResponse {
    relay.handle(Invocation::new(method, body.to_vec())).await
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        match self.body {
            ResponseBody::Json(reply) => (self.status, Json(reply)).into_response(),
            ResponseBody::Text(text) => (self.status, text).into_response(),
        }
    }
}
