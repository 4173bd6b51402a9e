// src/store.rs

use log::{debug, info};
use serde::Serialize;

use crate::error::StoreError;
use crate::ids::{Clock, IdGenerator};
use crate::models::{
    Comment, CommentType, Media, Post, Project, SkillCatalog, UserProfile,
};
use crate::seed;

/// Where a new comment goes. Project and post ids live in separate namespaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    Project(String),
    Post(String),
}

/// Owned copy of the store's collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub projects: Vec<Project>,
    pub posts: Vec<Post>,
    pub profile: UserProfile,
}

/// Authoritative in-memory holder of projects, posts and the acting user's profile.
pub struct ContentStore {
    projects: Vec<Project>,
    posts: Vec<Post>,
    profile: UserProfile,
    catalog: SkillCatalog,
    acting_user: String,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl ContentStore {
    /// An empty store: no projects, no posts, an empty skill catalog.
    pub fn new(
        acting_user: impl Into<String>,
        profile: UserProfile,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        ContentStore {
            projects: Vec::new(),
            posts: Vec::new(),
            profile,
            catalog: SkillCatalog::default(),
            acting_user: acting_user.into(),
            ids,
            clock,
        }
    }

    /// A store loaded with the static seed content.
    pub fn seeded(
        acting_user: impl Into<String>,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let loaded_at = clock.now();
        let store = ContentStore::new(acting_user, seed::profile(), ids, clock)
            .with_projects(seed::projects(loaded_at))
            .with_posts(seed::posts())
            .with_catalog(seed::skill_catalog());
        info!(
            "Content store seeded with {} projects and {} posts",
            store.projects.len(),
            store.posts.len()
        );
        store
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_catalog(mut self, catalog: SkillCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn acting_user(&self) -> &str {
        &self.acting_user
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn skill_catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            projects: self.projects.clone(),
            posts: self.posts.clone(),
            profile: self.profile.clone(),
        }
    }

    /// Prepends a comment by the acting user to the target's comment list.
    ///
    /// Returns `Ok(None)` without touching anything when `content` is blank.
    pub fn add_comment(
        &mut self,
        target: &CommentTarget,
        content: &str,
        comment_type: Option<CommentType>,
    ) -> Result<Option<Comment>, StoreError> {
        if content.trim().is_empty() {
            debug!("Ignoring blank comment on {:?}", target);
            return Ok(None);
        }

        let comments = match target {
            CommentTarget::Project(id) => {
                &mut self
                    .projects
                    .iter_mut()
                    .find(|p| &p.id == id)
                    .ok_or_else(|| StoreError::ProjectNotFound(id.clone()))?
                    .discussion
            }
            CommentTarget::Post(id) => {
                &mut self
                    .posts
                    .iter_mut()
                    .find(|p| &p.id == id)
                    .ok_or_else(|| StoreError::PostNotFound(id.clone()))?
                    .comments
            }
        };

        let comment = Comment {
            id: self.ids.next_id(),
            author: self.acting_user.clone(),
            content: content.to_string(),
            comment_type: comment_type.unwrap_or_default(),
            upvotes: 0,
            timestamp: self.clock.now(),
        };
        comments.insert(0, comment.clone());
        info!("Comment {} added to {:?}", comment.id, target);
        Ok(Some(comment))
    }

    /// Prepends a post by the acting user.
    ///
    /// A post needs text or at least one attachment; otherwise this is a no-op.
    pub fn add_post(&mut self, content: &str, media: Vec<Media>) -> Option<Post> {
        if content.trim().is_empty() && media.is_empty() {
            debug!("Ignoring empty post");
            return None;
        }

        let post = Post {
            id: self.ids.next_id(),
            author: self.acting_user.clone(),
            content: content.to_string(),
            media,
            comments: Vec::new(),
            created_at: self.clock.now(),
        };
        self.posts.insert(0, post.clone());
        info!("Post {} added with {} attachments", post.id, post.media.len());
        Some(post)
    }

    /// Appends `skill` unless it is blank or already present. Returns whether
    /// the skill list changed.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        if skill.trim().is_empty() || self.profile.has_skill(skill) {
            return false;
        }
        self.profile.skills.push(skill.to_string());
        debug!("Skill {:?} added", skill);
        true
    }

    /// Removes `skill` if present. Returns whether the skill list changed.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        match self.profile.skills.iter().position(|s| s == skill) {
            Some(index) => {
                self.profile.skills.remove(index);
                debug!("Skill {:?} removed", skill);
                true
            }
            None => false,
        }
    }
}
