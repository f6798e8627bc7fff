//! Search API handler
//!
//! Looks up a single item by id from either an urlencoded form (the HTML
//! search form) or a JSON body.

use crate::error::AppError;
use crate::services::presentation::SearchResult;
use crate::state::item::{coerce_float_id, coerce_id, ItemId};
use crate::state::AppState;
use axum::{
    extract::{FromRequest, Request, State},
    http::header,
    response::Json,
    Form,
};
use serde::Deserialize;

/// Raw id as sent by a form (always text) or by JSON (number or text)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// Whole JSON number
    Integer(u64),
    /// Any other JSON number
    Float(f64),
    /// Text, from forms or quoted JSON
    Text(String),
    /// Any other JSON value; never matches an item
    Other(serde_json::Value),
}

impl RawId {
    /// Coerce to an item id; `None` means no item can match
    pub fn coerce(&self) -> Option<ItemId> {
        match self {
            RawId::Integer(id) => Some(*id),
            RawId::Float(value) => coerce_float_id(*value),
            RawId::Text(text) => coerce_id(text),
            RawId::Other(_) => None,
        }
    }
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawId::Integer(id) => write!(f, "{}", id),
            RawId::Float(value) => write!(f, "{}", value),
            RawId::Text(text) => write!(f, "{}", text),
            RawId::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Flag as sent by a checkbox (`on`) or by JSON (`true`)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    /// JSON boolean
    Bool(bool),
    /// JSON number, set when non-zero
    Number(f64),
    /// Form or quoted JSON value
    Text(String),
    /// Any other JSON value, treated as unset
    Other(serde_json::Value),
}

impl Flag {
    /// Whether the flag is set
    pub fn is_set(&self) -> bool {
        match self {
            Flag::Bool(value) => *value,
            Flag::Number(value) => *value != 0.0,
            Flag::Text(text) => matches!(
                text.trim().to_ascii_lowercase().as_str(),
                "true" | "on" | "1" | "yes"
            ),
            Flag::Other(_) => false,
        }
    }
}

/// Search request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    /// Id of the item to find
    #[serde(default)]
    pub id: Option<RawId>,
    /// Include the photo URL in the result
    #[serde(default)]
    pub has_photo: Option<Flag>,
}

/// POST /search - Find an item by id
pub async fn search_items(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<SearchResult>, AppError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let search = match content_type {
        // No body to parse means no id, which is reported as not found
        None => SearchRequest::default(),
        Some(value) if value.starts_with("application/json") => {
            let Json(search) = Json::<SearchRequest>::from_request(request, &state).await?;
            search
        }
        Some(_) => {
            let Form(search) = Form::<SearchRequest>::from_request(request, &state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            search
        }
    };

    find(&state, search).await.map(Json)
}

/// Resolve a parsed search request against the registry
pub async fn find(state: &AppState, search: SearchRequest) -> Result<SearchResult, AppError> {
    let raw = search
        .id
        .ok_or_else(|| AppError::ItemNotFound("no id given".to_string()))?;
    let id = raw
        .coerce()
        .ok_or_else(|| AppError::ItemNotFound(raw.to_string()))?;
    let want_photo = search.has_photo.map(|flag| flag.is_set()).unwrap_or(false);

    state
        .registry
        .read()
        .await
        .find_exact(id, want_photo, &state.public_url)
}
