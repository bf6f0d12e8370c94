use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::Result,
    middleware_layer::current_user::CurrentUser,
    models::tcc::{Tcc, TccStatus},
    permissions::{Capability, PermissionGuard, Permissions},
    services::tccs::{self as tcc_service, TccChanges},
    state::AppState,
};

/// The request payload for creating a TCC.
#[derive(Deserialize)]
pub struct CreateTccRequest {
    pub title: String,
    #[serde(default)]
    pub organization_id: Option<Uuid>,
}

/// The request payload for updating a TCC.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTccRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<TccStatus>,
    #[serde(default)]
    pub attach_document: bool,
}

/// The actions offered next to a TCC.
#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub struct TccActions {
    pub modify: bool,
    pub delete: bool,
    pub download: bool,
}

/// A TCC as shown to one user.
#[derive(Serialize)]
pub struct TccView {
    #[serde(flatten)]
    pub tcc: Tcc,
    pub actions: TccActions,
}

impl TccView {
    pub fn new(tcc: Tcc, permissions: &Permissions<'_>) -> Self {
        let granted = |capability: Capability<'_>| {
            PermissionGuard::new(capability, true)
                .with_fallback(false)
                .render(permissions)
                .unwrap_or(false)
        };

        let actions = TccActions {
            modify: granted(Capability::ModifyTcc(&tcc)),
            delete: granted(Capability::DeleteTcc(&tcc)),
            download: granted(Capability::DownloadFile(&tcc)),
        };

        Self { tcc, actions }
    }
}

/// Lists the TCCs visible to the current user.
pub async fn list_tccs(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Vec<TccView>>> {
    current.require()?;
    let permissions = current.permissions();

    let tccs = tcc_service::list_visible(&state.directory, &permissions, None).await;
    let views = tccs
        .into_iter()
        .map(|tcc| TccView::new(tcc, &permissions))
        .collect();

    Ok(Json(views))
}

/// Creates a new draft TCC.
pub async fn create_tcc(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<CreateTccRequest>,
) -> Result<Response> {
    let user = current.require()?;

    let tcc = tcc_service::create_tcc(&state.directory, user, req.title, req.organization_id).await?;
    let view = TccView::new(tcc, &current.permissions());

    Ok((StatusCode::CREATED, Json(view)).into_response())
}

/// Shows one TCC.
pub async fn get_tcc(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(tcc_id): Path<Uuid>,
) -> Result<Json<TccView>> {
    current.require()?;
    let permissions = current.permissions();

    let tcc = tcc_service::find_visible(&state.directory, &permissions, tcc_id).await?;
    Ok(Json(TccView::new(tcc, &permissions)))
}

/// Updates title, status or document of a TCC.
pub async fn update_tcc(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(tcc_id): Path<Uuid>,
    Json(req): Json<UpdateTccRequest>,
) -> Result<Json<TccView>> {
    current.require()?;
    let permissions = current.permissions();

    let changes = TccChanges {
        title: req.title,
        status: req.status,
        attach_document: req.attach_document,
    };
    let tcc = tcc_service::update_tcc(&state.directory, &permissions, tcc_id, changes).await?;

    Ok(Json(TccView::new(tcc, &permissions)))
}

/// Deletes a TCC.
pub async fn delete_tcc(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(tcc_id): Path<Uuid>,
) -> Result<StatusCode> {
    current.require()?;

    tcc_service::delete_tcc(&state.directory, &current.permissions(), tcc_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Streams the TCC's PDF for inline viewing.
pub async fn view_document(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(tcc_id): Path<Uuid>,
) -> Result<Response> {
    current.require()?;

    let (tcc, bytes) = tcc_service::read_document(
        &state.directory,
        &current.permissions(),
        &state.config.files_dir,
        tcc_id,
    )
    .await?;

    tracing::debug!("📄 Serving document for TCC {} ({} bytes)", tcc.id, bytes.len());

    let disposition = format!(
        "inline; filename=\"{}\"",
        tcc.file_name.as_deref().unwrap_or("tcc.pdf")
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
