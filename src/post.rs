// src/post.rs

use actix_web::{web, HttpResponse};
use log::{debug, info};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::feed::{sort_posts, SortOrder};
use crate::models::Media;
use crate::seed::BRANCHES;
use crate::store::CommentTarget;

#[derive(Debug, Deserialize)]
pub struct PostListQuery {
    pub order: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
}

impl CreatePostRequest {
    fn media(&self) -> Vec<Media> {
        self.images
            .iter()
            .map(Media::image)
            .chain(self.videos.iter().map(Media::video))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct AddPostCommentRequest {
    pub content: String,
}

/// GET /posts?order=latest|oldest
/// Without an order the posts view's selection applies.
pub async fn list_posts(
    data: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> ApiResult<HttpResponse> {
    let order = match &query.order {
        Some(order) => order.parse::<SortOrder>()?,
        None => data.navigator()?.sort_order(),
    };
    debug!("Listing posts by {}", order);

    let store = data.store()?;
    Ok(HttpResponse::Ok().json(sort_posts(store.posts(), order)))
}

/// GET /posts/branches
pub async fn list_branches() -> HttpResponse {
    HttpResponse::Ok().json(BRANCHES)
}

/// POST /posts
/// 204 when there is neither text nor media.
pub async fn create_post(
    data: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> ApiResult<HttpResponse> {
    let mut store = data.store()?;
    match store.add_post(&body.content, body.media()) {
        Some(post) => {
            info!("Post {} created", post.id);
            Ok(HttpResponse::Ok().json(post))
        }
        None => Ok(HttpResponse::NoContent().finish()),
    }
}

/// POST /posts/{post_id}/comments
pub async fn add_post_comment(
    data: web::Data<AppState>,
    post_id: web::Path<String>,
    body: web::Json<AddPostCommentRequest>,
) -> ApiResult<HttpResponse> {
    let target = CommentTarget::Post(post_id.into_inner());
    let mut store = data.store()?;
    match store.add_comment(&target, &body.content, None)? {
        Some(comment) => Ok(HttpResponse::Ok().json(comment)),
        None => Ok(HttpResponse::NoContent().finish()),
    }
}
