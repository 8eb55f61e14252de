use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sportscenter_core::member::{Member, MemberInput};

use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub subscription_status: String,
}

impl From<Member> for MemberDto {
    fn from(member: Member) -> Self {
        MemberDto {
            id: member.id,
            email: member.email,
            first_name: member.first_name,
            last_name: member.last_name,
            phone: member.phone,
            subscription_status: member.subscription_status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl From<MemberRequest> for MemberInput {
    fn from(req: MemberRequest) -> Self {
        MemberInput {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            phone: req.phone,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(list_members).post(create_member))
        .route(
            "/members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
}

/// POST /members
async fn create_member(
    State(state): State<AppState>,
    Json(req): Json<MemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let member = state.members.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(MemberDto::from(member))))
}

/// GET /members/:id
async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MemberDto>, AppError> {
    let member = state.members.get(id).await?;
    Ok(Json(MemberDto::from(member)))
}

/// GET /members
async fn list_members(State(state): State<AppState>) -> Result<Json<Vec<MemberDto>>, AppError> {
    let members = state.members.list_all().await?;
    Ok(Json(members.into_iter().map(MemberDto::from).collect()))
}

/// PUT /members/:id
async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MemberRequest>,
) -> Result<Json<MemberDto>, AppError> {
    let member = state.members.update(id, req.into()).await?;
    Ok(Json(MemberDto::from(member)))
}

/// DELETE /members/:id
async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.members.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
