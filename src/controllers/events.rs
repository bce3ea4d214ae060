use axum::{
    body::Bytes,
    extract::{FromRequestParts, RawQuery, State},
    http::request::Parts,
    response::Html,
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;

use crate::{error::AppError, views, AppState};

const EVENT_PREFIX: &str = "/event/";

pub fn routes() -> Router<Arc<AppState>> {
    // Every path under /event/ reaches the handlers, so a bad suffix is a 400
    Router::new()
        .route("/", get(list_events))
        .route("/event/", event_page())
        .route("/event/{id}", event_page())
        .route("/event/{id}/{*rest}", event_page())
}

fn event_page() -> MethodRouter<Arc<AppState>> {
    get(show_event).post(book_ticket)
}

/// Event id taken from everything after `/event/` in the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for EventId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let suffix = parts
            .uri
            .path()
            .strip_prefix(EVENT_PREFIX)
            .unwrap_or_default();
        parse_event_id(suffix).map(EventId)
    }
}

fn parse_event_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::InvalidEventId(raw.to_string()))
}

/// First `ticket_id` from the form body, then from the query string.
/// Missing or garbled input becomes ticket 0, which matches nothing.
pub fn form_ticket_id(body: &[u8], query: Option<&str>) -> i64 {
    let body_pairs: Vec<(String, String)> =
        serde_urlencoded::from_bytes(body).unwrap_or_default();
    let query_pairs: Vec<(String, String)> = query
        .and_then(|q| serde_urlencoded::from_str(q).ok())
        .unwrap_or_default();

    body_pairs
        .into_iter()
        .chain(query_pairs)
        .find(|(key, _)| key == "ticket_id")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(0)
}

// GET /
async fn list_events(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let events = state.store.list().await;
    Ok(Html(views::render_index(&events)?))
}

// GET /event/{id}
async fn show_event(
    State(state): State<Arc<AppState>>,
    EventId(event_id): EventId,
) -> Result<Html<String>, AppError> {
    let event = state.store.get(event_id).await?;
    Ok(Html(views::render_event(&event)?))
}

// POST /event/{id}
async fn book_ticket(
    State(state): State<Arc<AppState>>,
    EventId(event_id): EventId,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Html<String>, AppError> {
    let ticket_id = form_ticket_id(&body, query.as_deref());
    state.bookings.book(event_id, ticket_id).await?;

    let event = state.store.get(event_id).await?;
    Ok(Html(views::render_event(&event)?))
}
