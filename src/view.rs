// src/view.rs

use actix_web::{web, HttpResponse};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::error::{ApiError, ApiResult, StoreError};
use crate::feed::{CategoryFilter, SortOrder};
use crate::models::{CommentType, MediaKind};
use crate::navigation::{Navigator, Screen, View, ViewState};
use crate::store::CommentTarget;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse<'a> {
    pub view: View,
    pub screen: Screen,
    pub loading: bool,
    pub low_data_mode: bool,
    pub state: &'a ViewState,
    /// Project the detail view shows once resolved against the store.
    pub project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetViewRequest {
    pub view: String,
    pub project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetCategoryRequest {
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct SetOrderRequest {
    pub order: String,
}

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    #[serde(default)]
    pub content: String,
    /// Comment template; only the detail view accepts one.
    pub template: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AttachmentRequest {
    pub kind: MediaKind,
    pub uri: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogCategoryRequest {
    pub name: String,
}

fn render(nav: &Navigator, featured: Option<String>) -> HttpResponse {
    let project_id = match nav.state() {
        ViewState::Detail { project_id, .. } => project_id.clone().or(featured),
        _ => None,
    };
    HttpResponse::Ok().json(ViewResponse {
        view: nav.current(),
        screen: nav.screen(),
        loading: nav.is_loading(),
        low_data_mode: nav.low_data_mode(),
        state: nav.state(),
        project_id,
    })
}

fn featured_project_id(data: &AppState) -> ApiResult<Option<String>> {
    Ok(data.store()?.projects().first().map(|p| p.id.clone()))
}

/// GET /view
pub async fn get_view(data: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let featured = featured_project_id(&data)?;
    let nav = data.navigator()?;
    Ok(render(&nav, featured))
}

/// PUT /view
pub async fn set_view(
    data: web::Data<AppState>,
    body: web::Json<SetViewRequest>,
) -> ApiResult<HttpResponse> {
    let view = body.view.parse::<View>()?;
    if let Some(project_id) = &body.project_id {
        if view != View::Detail {
            return Err(ApiError::BadRequest(
                "projectId is only valid for the detail view".to_string(),
            ));
        }
        if data.store()?.project(project_id).is_none() {
            return Err(StoreError::ProjectNotFound(project_id.clone()).into());
        }
    }
    let featured = featured_project_id(&data)?;

    let mut nav = data.navigator()?;
    match &body.project_id {
        Some(project_id) => nav.open_project(project_id.as_str()),
        None => {
            nav.select(view);
        }
    }
    info!("View set to {}", nav.current());
    Ok(render(&nav, featured))
}

/// PUT /view/category
pub async fn set_category(
    data: web::Data<AppState>,
    body: web::Json<SetCategoryRequest>,
) -> ApiResult<HttpResponse> {
    let featured = featured_project_id(&data)?;
    let mut nav = data.navigator()?;
    if !nav.set_category(CategoryFilter::parse(&body.category)) {
        return Err(ApiError::BadRequest("the feed view is not selected".to_string()));
    }
    Ok(render(&nav, featured))
}

/// PUT /view/order
pub async fn set_order(
    data: web::Data<AppState>,
    body: web::Json<SetOrderRequest>,
) -> ApiResult<HttpResponse> {
    let order = body.order.parse::<SortOrder>()?;
    let featured = featured_project_id(&data)?;
    let mut nav = data.navigator()?;
    if !nav.set_sort_order(order) {
        return Err(ApiError::BadRequest("the posts view is not selected".to_string()));
    }
    Ok(render(&nav, featured))
}

/// POST /view/skill_editing
pub async fn toggle_skill_editing(data: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let featured = featured_project_id(&data)?;
    let mut nav = data.navigator()?;
    if nav.toggle_skill_editing().is_none() {
        return Err(ApiError::BadRequest("the profile view is not selected".to_string()));
    }
    Ok(render(&nav, featured))
}

/// POST /view/order/toggle
pub async fn toggle_order(data: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let featured = featured_project_id(&data)?;
    let mut nav = data.navigator()?;
    if nav.toggle_sort_order().is_none() {
        return Err(ApiError::BadRequest("the posts view is not selected".to_string()));
    }
    Ok(render(&nav, featured))
}

/// POST /view/catalog_category
/// Expands a skill catalog group while editing; the same name collapses it.
pub async fn toggle_catalog_category(
    data: web::Data<AppState>,
    body: web::Json<CatalogCategoryRequest>,
) -> ApiResult<HttpResponse> {
    if data.store()?.skill_catalog().category(&body.name).is_none() {
        return Err(ApiError::BadRequest(format!(
            "unknown skill category: {}",
            body.name
        )));
    }
    let featured = featured_project_id(&data)?;
    let mut nav = data.navigator()?;
    if !nav.toggle_catalog_category(&body.name) {
        return Err(ApiError::BadRequest("skills are not being edited".to_string()));
    }
    Ok(render(&nav, featured))
}

/// PUT /view/draft
/// Replaces the composer text of the detail or posts view.
pub async fn set_draft(
    data: web::Data<AppState>,
    body: web::Json<DraftRequest>,
) -> ApiResult<HttpResponse> {
    let template = body
        .template
        .as_deref()
        .map(str::parse::<CommentType>)
        .transpose()?;
    let featured = featured_project_id(&data)?;
    let mut nav = data.navigator()?;

    let no_composer = || ApiError::BadRequest("no composer on this view".to_string());
    match nav.current() {
        View::Detail => {
            let draft = nav.comment_draft_mut().ok_or_else(no_composer)?;
            draft.content = body.content.clone();
            if let Some(template) = template {
                draft.select_template(template);
            }
        }
        View::Posts => {
            if template.is_some() {
                return Err(ApiError::BadRequest(
                    "templates only apply to comment drafts".to_string(),
                ));
            }
            let draft = nav.post_draft_mut().ok_or_else(no_composer)?;
            draft.content = body.content.clone();
        }
        View::Feed | View::Profile => return Err(no_composer()),
    }
    Ok(render(&nav, featured))
}

/// POST /view/draft/attachments
pub async fn attach_media(
    data: web::Data<AppState>,
    body: web::Json<AttachmentRequest>,
) -> ApiResult<HttpResponse> {
    let featured = featured_project_id(&data)?;
    let mut nav = data.navigator()?;
    let draft = nav
        .post_draft_mut()
        .ok_or_else(|| ApiError::BadRequest("the posts view is not selected".to_string()))?;
    let uri = body.uri.clone();
    match body.kind {
        MediaKind::Image => draft.attach_image(uri),
        MediaKind::Video => draft.attach_video(uri),
    }
    debug!("Attached {:?} to post draft", body.kind);
    Ok(render(&nav, featured))
}

/// POST /view/draft/submit
/// 200 with the created comment or post; 204 when the draft is ignored and kept.
pub async fn submit_draft(data: web::Data<AppState>) -> ApiResult<HttpResponse> {
    // Lock order is navigator then store.
    let mut nav = data.navigator()?;
    let mut store = data.store()?;
    let no_composer = || ApiError::BadRequest("no composer on this view".to_string());

    match nav.state() {
        ViewState::Detail { project_id, .. } => {
            let project_id = project_id
                .clone()
                .or_else(|| store.projects().first().map(|p| p.id.clone()))
                .ok_or_else(|| ApiError::BadRequest("no project to comment on".to_string()))?;
            let target = CommentTarget::Project(project_id);
            let draft = nav.comment_draft_mut().ok_or_else(no_composer)?;
            match draft.submit(&mut store, &target)? {
                Some(comment) => {
                    info!("Comment {} submitted from draft on {:?}", comment.id, target);
                    Ok(HttpResponse::Ok().json(comment))
                }
                None => Ok(HttpResponse::NoContent().finish()),
            }
        }
        ViewState::Posts { .. } => {
            let draft = nav.post_draft_mut().ok_or_else(no_composer)?;
            match draft.submit(&mut store) {
                Some(post) => {
                    info!("Post {} submitted from draft", post.id);
                    Ok(HttpResponse::Ok().json(post))
                }
                None => Ok(HttpResponse::NoContent().finish()),
            }
        }
        ViewState::Feed { .. } | ViewState::Profile { .. } => Err(no_composer()),
    }
}
