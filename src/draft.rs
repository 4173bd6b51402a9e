// src/draft.rs
//
// Composer state for the comment box and the post box. A draft is cleared
// only when its submission is accepted by the store.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::{Comment, CommentType, Media, Post};
use crate::store::{CommentTarget, ContentStore};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub content: String,
    pub template: Option<CommentType>,
}

impl CommentDraft {
    /// Picking a template always selects it; only a successful submit clears it.
    pub fn select_template(&mut self, template: CommentType) {
        self.template = Some(template);
    }

    pub fn submit(
        &mut self,
        store: &mut ContentStore,
        target: &CommentTarget,
    ) -> Result<Option<Comment>, StoreError> {
        let comment = store.add_comment(target, &self.content, self.template)?;
        if comment.is_some() {
            *self = CommentDraft::default();
        }
        Ok(comment)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub content: String,
    pub media: Vec<Media>,
}

impl PostDraft {
    pub fn attach_image(&mut self, uri: impl Into<String>) {
        self.media.push(Media::image(uri));
    }

    pub fn attach_video(&mut self, uri: impl Into<String>) {
        self.media.push(Media::video(uri));
    }

    pub fn submit(&mut self, store: &mut ContentStore) -> Option<Post> {
        let post = store.add_post(&self.content, self.media.clone())?;
        *self = PostDraft::default();
        Some(post)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::ids::{FixedClock, SequentialIds};

    fn store() -> ContentStore {
        ContentStore::seeded(
            "You",
            Box::new(SequentialIds::starting_at(500)),
            Box::new(FixedClock(Utc::now())),
        )
    }

    #[test]
    fn comment_draft_clears_after_submit() {
        let mut store = store();
        let mut draft = CommentDraft::default();
        draft.content = "Use BLE mesh".to_string();
        draft.select_template(CommentType::Resource);

        let comment = draft
            .submit(&mut store, &CommentTarget::Project("1".to_string()))
            .expect("project exists")
            .expect("comment created");

        assert_eq!(comment.comment_type, CommentType::Resource);
        assert_eq!(draft, CommentDraft::default());
    }

    #[test]
    fn blank_comment_draft_is_kept() {
        let mut store = store();
        let mut draft = CommentDraft {
            content: "   ".to_string(),
            template: Some(CommentType::Risk),
        };

        let result = draft.submit(&mut store, &CommentTarget::Project("1".to_string()));

        assert_eq!(result, Ok(None));
        assert_eq!(draft.content, "   ");
        assert_eq!(draft.template, Some(CommentType::Risk));
    }

    #[test]
    fn selecting_active_template_keeps_it() {
        let mut draft = CommentDraft::default();
        draft.select_template(CommentType::Risk);
        draft.select_template(CommentType::Alternative);
        assert_eq!(draft.template, Some(CommentType::Alternative));
        draft.select_template(CommentType::Alternative);
        assert_eq!(draft.template, Some(CommentType::Alternative));
    }

    #[test]
    fn post_draft_submits_attachments_and_clears() {
        let mut store = store();
        let mut draft = PostDraft::default();
        draft.attach_image("blob:one");
        draft.attach_video("blob:two");

        let post = draft.submit(&mut store).expect("media-only post accepted");

        assert_eq!(post.images().collect::<Vec<_>>(), vec!["blob:one"]);
        assert_eq!(post.videos().collect::<Vec<_>>(), vec!["blob:two"]);
        assert_eq!(draft, PostDraft::default());
        assert_eq!(store.posts()[0].id, post.id);
    }

    #[test]
    fn empty_post_draft_is_ignored() {
        let mut store = store();
        let mut draft = PostDraft {
            content: " ".to_string(),
            media: Vec::new(),
        };

        assert!(draft.submit(&mut store).is_none());
        assert_eq!(draft.content, " ");
        assert_eq!(store.posts().len(), 2);
    }
}
