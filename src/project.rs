// src/project.rs

use actix_web::{web, HttpResponse};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::error::{ApiResult, StoreError};
use crate::feed::{filter_projects_by_category, CategoryFilter};
use crate::models::{CommentType, Project, ProjectPhase, TimelineStep};
use crate::seed::CATEGORIES;
use crate::store::CommentTarget;

/// Feed card for a project; leaves out timeline and discussion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub phase: ProjectPhase,
    pub skills_needed: Vec<String>,
    pub likes: u32,
    pub comments_count: u32,
    pub category: String,
}

impl From<&Project> for ProjectCard {
    fn from(p: &Project) -> Self {
        ProjectCard {
            id: p.id.clone(),
            title: p.title.clone(),
            description: p.description.clone(),
            author: p.author.clone(),
            phase: p.phase,
            skills_needed: p.skills_needed.clone(),
            likes: p.likes,
            comments_count: p.comments_count,
            category: p.category.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub current_step: Option<TimelineStep>,
}

/// One composer template button.
#[derive(Debug, Serialize)]
pub struct CommentTemplate {
    #[serde(rename = "type")]
    pub comment_type: CommentType,
    pub label: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub content: String,
    #[serde(rename = "type")]
    pub comment_type: Option<String>,
}

/// GET /projects?category=
/// Without a category the feed view's selected filter applies.
pub async fn list_projects(
    data: web::Data<AppState>,
    query: web::Query<ProjectListQuery>,
) -> ApiResult<HttpResponse> {
    let filter = match &query.category {
        Some(category) => CategoryFilter::parse(category),
        None => data.navigator()?.category(),
    };
    debug!("Listing projects with filter {:?}", filter);

    let store = data.store()?;
    let cards: Vec<ProjectCard> = filter_projects_by_category(store.projects(), &filter)
        .into_iter()
        .map(ProjectCard::from)
        .collect();
    Ok(HttpResponse::Ok().json(cards))
}

/// GET /projects/categories
pub async fn list_categories() -> HttpResponse {
    HttpResponse::Ok().json(CATEGORIES)
}

/// GET /projects/comment_templates
pub async fn comment_templates() -> HttpResponse {
    let templates: Vec<CommentTemplate> = CommentType::TEMPLATES
        .iter()
        .filter_map(|t| {
            t.template_label().map(|label| CommentTemplate {
                comment_type: *t,
                label,
            })
        })
        .collect();
    HttpResponse::Ok().json(templates)
}

/// GET /projects/{project_id}
pub async fn get_project(
    data: web::Data<AppState>,
    project_id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let project_id = project_id.into_inner();
    let store = data.store()?;
    let project = store
        .project(&project_id)
        .ok_or(StoreError::ProjectNotFound(project_id))?;

    Ok(HttpResponse::Ok().json(ProjectDetail {
        current_step: project.current_step().cloned(),
        project: project.clone(),
    }))
}

/// POST /projects/{project_id}/comments
/// 204 when the content is blank.
pub async fn add_project_comment(
    data: web::Data<AppState>,
    project_id: web::Path<String>,
    body: web::Json<AddCommentRequest>,
) -> ApiResult<HttpResponse> {
    let comment_type = body
        .comment_type
        .as_deref()
        .map(str::parse::<CommentType>)
        .transpose()?;
    let target = CommentTarget::Project(project_id.into_inner());

    let mut store = data.store()?;
    match store.add_comment(&target, &body.content, comment_type)? {
        Some(comment) => {
            info!("Comment {} posted on {:?}", comment.id, target);
            Ok(HttpResponse::Ok().json(comment))
        }
        None => Ok(HttpResponse::NoContent().finish()),
    }
}
