//! Sign-in, sign-up and session endpoints

use api_types::auth::{SessionResponse, SignIn, SignUp};
use axum::{Extension, Json, extract::State, http::StatusCode};
use engine::{Session, SignUpCmd};

use crate::{ServerError, profile::profile_view, server::ServerState};

fn session_response(session: Session) -> SessionResponse {
    SessionResponse {
        token: session.token,
        profile: profile_view(session.profile),
    }
}

pub async fn sign_in(
    State(state): State<ServerState>,
    Json(payload): Json<SignIn>,
) -> Result<Json<SessionResponse>, ServerError> {
    let session = state
        .engine
        .sign_in(&payload.email, &payload.password)
        .await?;
    Ok(Json(session_response(session)))
}

pub async fn sign_up(
    State(state): State<ServerState>,
    Json(payload): Json<SignUp>,
) -> Result<(StatusCode, Json<SessionResponse>), ServerError> {
    let session = state
        .engine
        .sign_up(SignUpCmd::new(payload.name, payload.email, payload.password))
        .await?;
    Ok((StatusCode::CREATED, Json(session_response(session))))
}

pub async fn current(Extension(session): Extension<Session>) -> Json<SessionResponse> {
    Json(session_response(session))
}

pub async fn sign_out(
    Extension(session): Extension<Session>,
    State(state): State<ServerState>,
) -> Result<StatusCode, ServerError> {
    state.engine.sign_out(&session.token).await?;
    Ok(StatusCode::NO_CONTENT)
}
