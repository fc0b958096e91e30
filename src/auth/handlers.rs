use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{instrument, warn};

use crate::{
    auth::{
        dto::{Ack, AuthResponse, SigninRequest, SignupRequest},
        services::{authenticate_user, create_user},
        validation::{validate_signin, validate_signup},
    },
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .route("/sign-out", post(sign_out))
}

#[instrument(skip(state, payload))]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let new_user = validate_signup(payload).map_err(|details| {
        warn!(fields = details.len(), "sign-up payload failed validation");
        AppError::Validation(details)
    })?;

    let user = create_user(&state.db, new_user).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered".into(),
            user,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SigninRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let creds = validate_signin(payload).map_err(|details| {
        warn!(fields = details.len(), "sign-in payload failed validation");
        AppError::Validation(details)
    })?;

    let user = authenticate_user(&state.db, &creds.email, &creds.password).await?;

    Ok(Json(AuthResponse {
        message: "Signed in".into(),
        user,
    }))
}

// No session state exists to clear, so this is a plain acknowledgment.
#[instrument]
pub async fn sign_out() -> Json<Ack> {
    Json(Ack {
        message: "Signed out".into(),
    })
}
