use axum::{extract::State, Json};

use crate::{
    error::Result,
    middleware_layer::current_user::CurrentUser,
    models::user::User,
    permissions::Capability,
    state::AppState,
};

/// Lists every user. Password hashes are never serialized.
pub async fn list_users(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Vec<User>>> {
    current.require()?;
    current.permissions().require(Capability::ManageUsers)?;

    Ok(Json(state.directory.users.list().await))
}
