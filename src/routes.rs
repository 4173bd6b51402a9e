use actix_web::web;

use crate::post::{add_post_comment, create_post, list_branches, list_posts};
use crate::profile::{add_skill, get_profile, remove_skill, skill_catalog};
use crate::project::{
    add_project_comment, comment_templates, get_project, list_categories, list_projects,
};
use crate::view::{
    attach_media, get_view, set_category, set_draft, set_order, set_view, submit_draft,
    toggle_catalog_category, toggle_order, toggle_skill_editing,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // PROJECTS
        .service(
            web::scope("/projects")
                .route("", web::get().to(list_projects))
                .route("/categories", web::get().to(list_categories))
                .route("/comment_templates", web::get().to(comment_templates))
                .route("/{project_id}", web::get().to(get_project))
                .route("/{project_id}/comments", web::post().to(add_project_comment)),
        )
        // POSTS
        .service(
            web::scope("/posts")
                .route("", web::get().to(list_posts))
                .route("", web::post().to(create_post))
                .route("/branches", web::get().to(list_branches))
                .route("/{post_id}/comments", web::post().to(add_post_comment)),
        )
        // PROFILE
        .service(
            web::scope("/profile")
                .route("", web::get().to(get_profile))
                .route("/skills/catalog", web::get().to(skill_catalog))
                .route("/skills", web::post().to(add_skill))
                .route("/skills/{skill}", web::delete().to(remove_skill)),
        )
        // NAVIGATION
        .service(
            web::scope("/view")
                .route("", web::get().to(get_view))
                .route("", web::put().to(set_view))
                .route("/category", web::put().to(set_category))
                .route("/order", web::put().to(set_order))
                .route("/order/toggle", web::post().to(toggle_order))
                .route("/skill_editing", web::post().to(toggle_skill_editing))
                .route("/catalog_category", web::post().to(toggle_catalog_category))
                .route("/draft", web::put().to(set_draft))
                .route("/draft/attachments", web::post().to(attach_media))
                .route("/draft/submit", web::post().to(submit_draft)),
        );
}
