//! HTTP transport for the directory service
//!
//! One route per directory operation, nothing more. Requests are
//! translated to core calls and core results to JSON; every rule about
//! users, channels, and notices lives in `rustchatd-core`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rustchatd_core::{Directory, Error, Notice};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory>,
    pub version: String,
}

/// JSON error envelope, `{ "error": "..." }` with the matching status
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::UnknownUser(_) | Error::UnknownNick(_) | Error::NotMember { .. } => {
                Self::bad_request(err.to_string())
            }
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct InfoResponse {
    version: String,
}

/// Public view of a user: the id stays private to its owner
#[derive(Serialize)]
struct PublicUser {
    nick: String,
}

#[derive(Serialize)]
struct RegisterResponse {
    id: Uuid,
    nick: String,
}

#[derive(Deserialize)]
struct SayRequest {
    message: String,
}

#[derive(Serialize)]
struct Ack {
    ok: bool,
}

const ACK: Ack = Ack { ok: true };

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/info", get(info))
        .route("/users", get(list_users))
        .route("/users/register/{nick}", post(register))
        .route("/users/whois/{nick}", get(whois))
        .route("/user/{id}/disconnect", delete(disconnect))
        .route("/channels", get(list_channels))
        .route("/user/{id}/channels/{channel}/join", put(join))
        .route("/user/{id}/channels/{channel}/say", put(say))
        .route("/user/{id}/channels/{channel}/leave", delete(leave))
        .route("/user/{id}/notices", get(notices))
        .fallback(unknown_route)
        .method_not_allowed_fallback(unknown_route)
        .with_state(state)
}

/// An unparseable id can never name a live user, so it gets the same
/// rejection as an unknown one
fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(format!("Unknown user: {}", raw)))
}

async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    tracing::debug!(
        users = state.directory.user_count(),
        channels = state.directory.channel_count(),
        "info requested"
    );
    Json(InfoResponse {
        version: state.version.clone(),
    })
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<PublicUser>> {
    let users = state
        .directory
        .list_users()
        .into_iter()
        .map(|nick| PublicUser { nick })
        .collect();
    Json(users)
}

async fn register(
    State(state): State<AppState>,
    Path(nick): Path<String>,
) -> Json<RegisterResponse> {
    let registration = state.directory.register(&nick);
    Json(RegisterResponse {
        id: registration.id,
        nick: registration.nick,
    })
}

async fn whois(
    State(state): State<AppState>,
    Path(nick): Path<String>,
) -> Result<Json<PublicUser>, ApiError> {
    let user = state.directory.whois(&nick)?;
    Ok(Json(PublicUser { nick: user.nick }))
}

async fn disconnect(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, ApiError> {
    let id = parse_user_id(&id)?;
    state.directory.disconnect(id)?;
    Ok(Json(ACK))
}

async fn list_channels(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.directory.list_channels())
}

async fn join(
    State(state): State<AppState>,
    Path((id, channel)): Path<(String, String)>,
) -> Result<Json<Vec<String>>, ApiError> {
    let id = parse_user_id(&id)?;
    let members = state.directory.join(id, &channel)?;
    Ok(Json(members))
}

async fn say(
    State(state): State<AppState>,
    Path((id, channel)): Path<(String, String)>,
    Json(req): Json<SayRequest>,
) -> Result<Json<Ack>, ApiError> {
    let id = parse_user_id(&id)?;
    state.directory.say(id, &channel, &req.message)?;
    Ok(Json(ACK))
}

async fn leave(
    State(state): State<AppState>,
    Path((id, channel)): Path<(String, String)>,
) -> Result<Json<Ack>, ApiError> {
    let id = parse_user_id(&id)?;
    state.directory.leave(id, &channel)?;
    Ok(Json(ACK))
}

async fn notices(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Notice>>, ApiError> {
    let id = parse_user_id(&id)?;
    let notices = state.directory.drain_notices(id)?;
    Ok(Json(notices))
}

/// Uniform rejection for anything outside the operation set
async fn unknown_route() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Unknown route or method.".to_string(),
        }),
    )
        .into_response()
}
