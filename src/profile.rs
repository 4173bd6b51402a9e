// src/profile.rs

use actix_web::{web, HttpResponse};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::models::{KarmaTier, UserProfile};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse<'a> {
    #[serde(flatten)]
    pub profile: &'a UserProfile,
    pub karma_tier: KarmaTier,
    /// Author name stamped on comments and posts made from this session.
    pub acting_user: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CatalogSkill<'a> {
    pub name: &'a str,
    /// Already on the profile; the picker disables these.
    pub owned: bool,
}

#[derive(Debug, Serialize)]
pub struct CatalogGroup<'a> {
    pub name: &'a str,
    pub skills: Vec<CatalogSkill<'a>>,
}

#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    pub skill: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse<'a> {
    pub changed: bool,
    pub skills: &'a [String],
}

/// GET /profile
pub async fn get_profile(data: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let store = data.store()?;
    let profile = store.profile();
    Ok(HttpResponse::Ok().json(ProfileResponse {
        profile,
        karma_tier: profile.karma_tier(),
        acting_user: store.acting_user(),
    }))
}

/// GET /profile/skills/catalog
pub async fn skill_catalog(data: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let store = data.store()?;
    let profile = store.profile();
    let groups: Vec<CatalogGroup> = store
        .skill_catalog()
        .categories
        .iter()
        .map(|category| CatalogGroup {
            name: &category.name,
            skills: category
                .skills
                .iter()
                .map(|skill| CatalogSkill {
                    name: skill,
                    owned: profile.has_skill(skill),
                })
                .collect(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(groups))
}

/// POST /profile/skills
pub async fn add_skill(
    data: web::Data<AppState>,
    body: web::Json<SkillRequest>,
) -> ApiResult<HttpResponse> {
    let mut store = data.store()?;
    let changed = store.add_skill(&body.skill);
    debug!("add_skill {:?} changed={}", body.skill, changed);
    Ok(HttpResponse::Ok().json(SkillsResponse {
        changed,
        skills: &store.profile().skills,
    }))
}

/// DELETE /profile/skills/{skill}
pub async fn remove_skill(
    data: web::Data<AppState>,
    skill: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let mut store = data.store()?;
    let changed = store.remove_skill(&skill);
    debug!("remove_skill {:?} changed={}", skill.as_str(), changed);
    Ok(HttpResponse::Ok().json(SkillsResponse {
        changed,
        skills: &store.profile().skills,
    }))
}
