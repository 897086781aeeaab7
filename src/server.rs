use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use quick_cache::sync::Cache;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::event::{Event, EventDraft, Organizer};
use crate::ics;
use crate::validate::Violation;

const ICS_CACHE_CAPACITY: usize = 256;

/// Initial store contents, read from the data file at startup. The
/// in-memory maps stand in for the relational boundary.
#[derive(Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub organizers: Vec<Organizer>,
    #[serde(default)]
    pub events: Vec<Event>,
}

pub struct AppState {
    events: RwLock<HashMap<i64, Event>>,
    organizers: HashMap<i64, Organizer>,
    ics_cache: Option<Cache<i64, String>>,
    next_id: AtomicI64,
}

impl AppState {
    pub fn new(seed: SeedData, enable_cache: bool) -> Arc<Self> {
        let next_id = seed.events.iter().map(|event| event.id).max().unwrap_or(0) + 1;

        let organizers = seed
            .organizers
            .into_iter()
            .map(|organizer| (organizer.id, organizer))
            .collect();

        let events = seed
            .events
            .into_iter()
            .map(|event| (event.id, event))
            .collect();

        Arc::new(Self {
            events: RwLock::new(events),
            organizers,
            ics_cache: enable_cache.then(|| Cache::new(ICS_CACHE_CAPACITY)),
            next_id: AtomicI64::new(next_id),
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/:id", put(update_event))
        .route("/events/:id/ics", get(download_ics))
        .with_state(state)
}

#[derive(Serialize)]
struct ErrorBody {
    errors: Vec<String>,
}

fn violation_response(violations: Vec<Violation>) -> Response {
    let errors = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>();

    (StatusCode::BAD_REQUEST, Json(ErrorBody { errors })).into_response()
}

async fn list_events(State(state): State<Arc<AppState>>) -> Json<Vec<Event>> {
    let mut events = state
        .events
        .read()
        .await
        .values()
        .cloned()
        .collect::<Vec<Event>>();

    events.sort_by_key(|event| (event.start, event.id));

    Json(events)
}

async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<EventDraft>,
) -> Response {
    let violations = draft.validate();
    if !violations.is_empty() {
        return violation_response(violations);
    }

    if !state.organizers.contains_key(&draft.organizer_id) {
        return (StatusCode::BAD_REQUEST, "unknown organizer").into_response();
    }

    // Validation guarantees both halves are composed.
    let (Some(start), Some(end)) = (draft.start(), draft.end()) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let id = state.next_id.fetch_add(1, Ordering::Relaxed);
    let event = Event {
        id,
        title: draft.title,
        location: draft.location,
        start,
        end,
        multi: draft.multi,
        description: draft.description,
        organizer_id: draft.organizer_id,
    };

    state.events.write().await.insert(id, event.clone());
    log::info!("created event {id} `{}`", event.title);

    (StatusCode::CREATED, Json(event)).into_response()
}

async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(draft): Json<EventDraft>,
) -> Response {
    {
        let events = state.events.read().await;
        let Some(existing) = events.get(&id) else {
            return StatusCode::NOT_FOUND.into_response();
        };

        // A no-op edit counts as success without touching the store.
        if draft.matches(existing) {
            log::info!("event {id} unchanged, skipping store");
            return Json(existing.clone()).into_response();
        }
    }

    let violations = draft.validate();
    if !violations.is_empty() {
        return violation_response(violations);
    }

    let (Some(start), Some(end)) = (draft.start(), draft.end()) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let mut events = state.events.write().await;
    let Some(existing) = events.get_mut(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    *existing = Event {
        id,
        title: draft.title,
        location: draft.location,
        start,
        end,
        multi: draft.multi,
        description: draft.description,
        organizer_id: existing.organizer_id,
    };

    let updated = existing.clone();
    drop(events);

    if let Some(cache) = &state.ics_cache {
        cache.remove(&id);
    }

    log::info!("updated event {id} `{}`", updated.title);

    Json(updated).into_response()
}

async fn download_ics(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Response {
    let events = state.events.read().await;

    let Some(event) = events.get(&id) else {
        return (StatusCode::NOT_FOUND, "no such event").into_response();
    };

    let Some(organizer) = state.organizers.get(&event.organizer_id) else {
        return (StatusCode::NOT_FOUND, "no such organizer").into_response();
    };

    let document = match state.ics_cache.as_ref().and_then(|cache| cache.get(&id)) {
        Some(cached) => cached,
        None => match ics::export(event, organizer) {
            Ok(document) => {
                if let Some(cache) = &state.ics_cache {
                    cache.insert(id, document.clone());
                }
                document
            }
            Err(err) => {
                log::error!("exporting event {id} failed: {err}");
                return (StatusCode::INTERNAL_SERVER_ERROR, "no document available")
                    .into_response();
            }
        },
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        ics::download_filename(&event.title)
    );

    (
        [
            (header::CONTENT_TYPE, "text/calendar".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    )
        .into_response()
}
