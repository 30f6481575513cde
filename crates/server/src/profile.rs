//! Profile endpoints

use api_types::profile::{ProfileUpdate, ProfileView};
use axum::{Extension, Json, extract::State};
use engine::{MoneyCents, Session, UserProfile};

use crate::{ServerError, server::ServerState};

pub(crate) fn profile_view(profile: UserProfile) -> ProfileView {
    ProfileView {
        id: profile.id,
        name: profile.name,
        email: profile.email,
        monthly_budget_minor: profile.monthly_budget.cents(),
        selected_categories: profile.selected_categories,
        onboarding_complete: profile.onboarding_complete,
    }
}

pub async fn get(
    Extension(session): Extension<Session>,
    State(state): State<ServerState>,
) -> Result<Json<ProfileView>, ServerError> {
    let profile = state.engine.profile(session.profile.id).await?;
    Ok(Json(profile_view(profile)))
}

pub async fn update(
    Extension(session): Extension<Session>,
    State(state): State<ServerState>,
    Json(payload): Json<ProfileUpdate>,
) -> Result<Json<ProfileView>, ServerError> {
    let update = engine::ProfileUpdate {
        name: payload.name,
        monthly_budget: payload.monthly_budget_minor.map(MoneyCents::new),
        selected_categories: payload.selected_categories,
        onboarding_complete: payload.onboarding_complete,
    };
    let profile = state
        .engine
        .update_profile(session.profile.id, update)
        .await?;
    Ok(Json(profile_view(profile)))
}
