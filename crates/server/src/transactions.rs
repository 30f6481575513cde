//! Transactions API endpoints

use api_types::transaction::{
    ClearResponse, ImportResponse, TransactionImport, TransactionKind as ApiKind,
    TransactionListResponse, TransactionNew, TransactionUpdate, TransactionView,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{MoneyCents, Session, Transaction, TransactionDraft, TransactionPatch};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

fn map_kind(kind: engine::TransactionKind) -> ApiKind {
    match kind {
        engine::TransactionKind::Income => ApiKind::Income,
        engine::TransactionKind::Expense => ApiKind::Expense,
    }
}

fn engine_kind(kind: ApiKind) -> engine::TransactionKind {
    match kind {
        ApiKind::Income => engine::TransactionKind::Income,
        ApiKind::Expense => engine::TransactionKind::Expense,
    }
}

fn view(tx: Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        kind: map_kind(tx.kind),
        amount_minor: tx.amount.cents(),
        category: tx.category,
        description: tx.description,
        date: tx.date,
    }
}

fn draft(payload: TransactionNew) -> TransactionDraft {
    TransactionDraft {
        kind: engine_kind(payload.kind),
        amount: MoneyCents::new(payload.amount_minor),
        category: payload.category,
        description: payload.description,
        date: payload.date,
    }
}

pub async fn list(
    Extension(session): Extension<Session>,
    State(state): State<ServerState>,
) -> Result<Json<TransactionListResponse>, ServerError> {
    let txs = state.engine.list_transactions(session.profile.id).await?;
    Ok(Json(TransactionListResponse {
        transactions: txs.into_iter().map(view).collect(),
    }))
}

pub async fn get(
    Extension(session): Extension<Session>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransactionView>, ServerError> {
    let tx = state.engine.transaction(id, session.profile.id).await?;
    Ok(Json(view(tx)))
}

pub async fn create(
    Extension(session): Extension<Session>,
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let tx = state
        .engine
        .insert_transaction(session.profile.id, draft(payload))
        .await?;
    Ok((StatusCode::CREATED, Json(view(tx))))
}

pub async fn import(
    Extension(session): Extension<Session>,
    State(state): State<ServerState>,
    Json(payload): Json<TransactionImport>,
) -> Result<(StatusCode, Json<ImportResponse>), ServerError> {
    let drafts = payload.transactions.into_iter().map(draft).collect();
    let imported = state
        .engine
        .import_transactions(session.profile.id, drafts)
        .await?;
    Ok((StatusCode::CREATED, Json(ImportResponse { imported })))
}

pub async fn update(
    Extension(session): Extension<Session>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransactionUpdate>,
) -> Result<Json<TransactionView>, ServerError> {
    let patch = TransactionPatch {
        kind: payload.kind.map(engine_kind),
        amount: payload.amount_minor.map(MoneyCents::new),
        category: payload.category,
        description: payload.description,
        date: payload.date,
    };
    let tx = state
        .engine
        .update_transaction(id, session.profile.id, patch)
        .await?;
    Ok(Json(view(tx)))
}

pub async fn delete(
    Extension(session): Extension<Session>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_transaction(id, session.profile.id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear(
    Extension(session): Extension<Session>,
    State(state): State<ServerState>,
) -> Result<Json<ClearResponse>, ServerError> {
    let removed = state.engine.clear_transactions(session.profile.id).await?;
    Ok(Json(ClearResponse { removed }))
}
