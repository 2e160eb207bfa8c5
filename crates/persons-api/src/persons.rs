//! Handlers for `/persons` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/persons` | Optional `?limit=&offset=` |
//! | `POST` | `/persons` | Body: [`NewPersonBody`]; returns 201 + stored person |
//! | `GET`  | `/persons/{id}` | 400 for a non-positive or non-numeric id, 404 if absent |
//! | `GET`  | `/persons/color/{color}` | 400 for an unknown colour; optional `?limit=&offset=` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use persons_core::{Color, Page, Person, PersonRepository};
use serde::Deserialize;
use tracing::warn;

use crate::{
  error::{ApiError, store_error},
  validate::{self, NewPersonBody},
};

// ─── Pagination ───────────────────────────────────────────────────────────────

/// `limit` ≤ 0 means unbounded; a negative `offset` counts as zero.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
  #[serde(default)]
  pub limit:  i64,
  #[serde(default)]
  pub offset: i64,
}

impl From<PageParams> for Page {
  fn from(p: PageParams) -> Self { Page::new(p.limit, p.offset) }
}

/// Map a rejected query string to the JSON error body.
fn parse_page(params: Result<Query<PageParams>, QueryRejection>) -> Result<Page, ApiError> {
  let Query(params) = params.map_err(|e| {
    ApiError::BadRequest(format!("invalid query string: {}", e.body_text()))
  })?;
  Ok(params.into())
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /persons[?limit=<n>][&offset=<n>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonRepository,
{
  let persons = store.get_all(parse_page(params)?).await.map_err(store_error)?;
  Ok(Json(persons))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /persons/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonRepository,
{
  let id: i64 = id
    .parse()
    .map_err(|_| ApiError::BadRequest("id must be an integer".into()))?;
  let id = u64::try_from(id)
    .ok()
    .filter(|id| *id > 0)
    .ok_or_else(|| ApiError::BadRequest("id must be positive".into()))?;

  let person = store.get_by_id(id).await.map_err(store_error)?;
  Ok(Json(person))
}

// ─── By colour ────────────────────────────────────────────────────────────────

/// `GET /persons/color/{color}[?limit=<n>][&offset=<n>]`
pub async fn by_color<S>(
  State(store): State<Arc<S>>,
  Path(color): Path<String>,
  params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonRepository,
{
  let page = parse_page(params)?;
  let color: Color = color.parse().map_err(|e| {
    warn!(color = %color, "unknown color requested");
    ApiError::from(e)
  })?;
  let persons = store
    .get_by_color(color, page)
    .await
    .map_err(store_error)?;
  Ok(Json(persons))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /persons` — returns 201 + the stored [`Person`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewPersonBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonRepository,
{
  let Json(body) = body.map_err(|e| {
    ApiError::BadRequest(format!("invalid request body: {}", e.body_text()))
  })?;
  let input = validate::new_person(body)?;
  let person = store.add(input).await.map_err(store_error)?;
  Ok((StatusCode::CREATED, Json(person)))
}
