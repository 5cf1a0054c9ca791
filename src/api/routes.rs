//! HTTP routes for the shows collection.
//!
//! ## Routes
//!
//! - `GET /` - greeting
//! - `GET /mirror/:name` - echoes the path segment back
//! - `GET /shows` - every show, ordered by id
//! - `POST /shows` - create a show (201, or 422 when both fields are blank/negative)
//! - `GET /shows/:id` - one show (404 when absent)
//! - `PUT /shows/:id` - merge a partial update (201, 404 when absent)
//! - `DELETE /shows/:id` - remove a show (404 when absent)
//!
//! Bodies and path ids are parsed by hand rather than with axum's `Json`/`Path<u32>`
//! extractors so that malformed input is reported in the envelope format.

use super::envelope::Reply;
use super::error::ApiError;
use crate::clients::ShowClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{Show, ShowCreate, ShowId, ShowUpdate};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde::de::DeserializeOwned;
use std::num::IntErrorKind;
use tracing::{debug, instrument};

const SHOWS: &str = Show::COLLECTION;

/// Build the axum `Router` serving the API against the given store client.
pub fn router(shows: ShowClient) -> Router {
    Router::new()
        .route("/", get(hello_world))
        .route("/mirror/:name", get(mirror))
        .route("/shows", get(list_shows).post(create_show))
        .route(
            "/shows/:id",
            get(get_show).put(update_show).delete(delete_show),
        )
        .with_state(shows)
}

/// Any integer is a well-formed id. One that no `ShowId` can hold (negative, or past
/// `u32::MAX`) names no stored show and is reported as not found.
fn parse_id(raw: &str) -> Result<ShowId, ApiError> {
    let id = raw.parse::<i128>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ApiError::NotFound,
        _ => ApiError::MalformedInput(format!("invalid show id {raw:?}: {e}")),
    })?;
    u32::try_from(id).map(ShowId).map_err(|_| ApiError::NotFound)
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedInput(e.to_string()))
}

async fn hello_world() -> Result<Reply, ApiError> {
    Reply::with_result("content", &"hello world!")
}

#[instrument]
async fn mirror(Path(name): Path<String>) -> Result<Reply, ApiError> {
    Reply::with_result("name", &name)
}

#[instrument(skip_all)]
async fn list_shows(State(shows): State<ShowClient>) -> Result<Reply, ApiError> {
    let all = shows.list().await?;
    debug!(count = all.len(), "Listed shows");
    Reply::with_result(SHOWS, &all)
}

#[instrument(skip_all)]
async fn create_show(State(shows): State<ShowClient>, body: Bytes) -> Result<Reply, ApiError> {
    let params: ShowCreate = parse_body(&body)?;
    if !params.is_acceptable() {
        return Err(ApiError::Validation);
    }
    let show = shows.create_show(params).await?;
    Ok(Reply::with_result(SHOWS, &show)?.status(StatusCode::CREATED))
}

#[instrument(skip(shows))]
async fn get_show(
    State(shows): State<ShowClient>,
    Path(id): Path<String>,
) -> Result<Reply, ApiError> {
    let show = shows.get_show(parse_id(&id)?).await?;
    Reply::with_result(SHOWS, &show)
}

/// The existence check runs before the body is parsed, so an absent id is a 404 even
/// when the body is malformed.
#[instrument(skip(shows, body))]
async fn update_show(
    State(shows): State<ShowClient>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Reply, ApiError> {
    let id = parse_id(&id)?;
    shows.get_show(id).await?;
    let update: ShowUpdate = parse_body(&body)?;
    let show = shows.update_show(id, update).await?;
    Ok(Reply::with_result(SHOWS, &show)?.status(StatusCode::CREATED))
}

#[instrument(skip(shows))]
async fn delete_show(
    State(shows): State<ShowClient>,
    Path(id): Path<String>,
) -> Result<Reply, ApiError> {
    shows.delete(parse_id(&id)?).await?;
    Ok(Reply::ok().message("Show deleted"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_stored_range() {
        assert_eq!(parse_id("1").unwrap(), ShowId(1));
        assert_eq!(parse_id("4294967295").unwrap(), ShowId(u32::MAX));
    }

    #[test]
    fn test_parse_id_out_of_range_is_not_found() {
        for raw in ["-1", "4294967296", "99999999999999999999999999999999999999999999"] {
            assert!(matches!(parse_id(raw), Err(ApiError::NotFound)), "{raw}");
        }
    }

    #[test]
    fn test_parse_id_non_integer_is_malformed() {
        for raw in ["abc", "1.5", ""] {
            assert!(
                matches!(parse_id(raw), Err(ApiError::MalformedInput(_))),
                "{raw}"
            );
        }
    }
}
