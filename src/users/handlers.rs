use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{error::AppError, state::AppState, users::dto::UserSummary, users::services};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    let users = services::get_all_users(&state.db).await?;
    Ok(Json(users))
}
