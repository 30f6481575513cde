use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use std::sync::Arc;

use crate::{auth, profile, transactions};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Resolves the bearer token and stores the [`engine::Session`] in the
/// request extensions.
async fn require_session(
    auth_header: Option<TypedHeader<Authorization<Bearer>>>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(TypedHeader(header)) = auth_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };
    if header.token().is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let session = match state.engine.session(header.token()).await {
        Ok(session) => session,
        Err(engine::EngineError::Database(err)) => {
            tracing::error!("session lookup failed: {err}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        Err(_) => return Err(StatusCode::UNAUTHORIZED),
    };

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/auth/session", get(auth::current))
        .route("/auth/sign_out", post(auth::sign_out))
        .route(
            "/transactions",
            get(transactions::list)
                .post(transactions::create)
                .delete(transactions::clear),
        )
        .route("/transactions/import", post(transactions::import))
        .route(
            "/transactions/{id}",
            get(transactions::get)
                .patch(transactions::update)
                .delete(transactions::delete),
        )
        .route("/profile", get(profile::get).patch(profile::update))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session))
        .route("/auth/sign_in", post(auth::sign_in))
        .route("/auth/sign_up", post(auth::sign_up))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
