// src/navigation.rs

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::draft::{CommentDraft, PostDraft};
use crate::feed::{CategoryFilter, SortOrder};

/// Top-level views. Exactly one is selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Feed,
    Detail,
    Profile,
    Posts,
}

impl View {
    pub const ALL: [View; 4] = [View::Feed, View::Detail, View::Profile, View::Posts];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Feed => "feed",
            View::Detail => "detail",
            View::Profile => "profile",
            View::Posts => "posts",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct ParseViewError(pub String);

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseViewError(s.to_string()))
    }
}

/// Transient state owned by the selected view. Replaced with a fresh value
/// whenever the view changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewState {
    Feed {
        category: CategoryFilter,
    },
    #[serde(rename_all = "camelCase")]
    Detail {
        /// `None` shows the featured project.
        project_id: Option<String>,
        draft: CommentDraft,
    },
    #[serde(rename_all = "camelCase")]
    Profile {
        editing_skills: bool,
        catalog_category: Option<String>,
    },
    Posts {
        order: SortOrder,
        draft: PostDraft,
    },
}

impl ViewState {
    pub fn fresh(view: View) -> Self {
        match view {
            View::Feed => ViewState::Feed {
                category: CategoryFilter::All,
            },
            View::Detail => ViewState::Detail {
                project_id: None,
                draft: CommentDraft::default(),
            },
            View::Profile => ViewState::Profile {
                editing_skills: false,
                catalog_category: None,
            },
            View::Posts => ViewState::Posts {
                order: SortOrder::Latest,
                draft: PostDraft::default(),
            },
        }
    }

    pub fn view(&self) -> View {
        match self {
            ViewState::Feed { .. } => View::Feed,
            ViewState::Detail { .. } => View::Detail,
            ViewState::Profile { .. } => View::Profile,
            ViewState::Posts { .. } => View::Posts,
        }
    }
}

/// What should be painted right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "view", rename_all = "lowercase")]
pub enum Screen {
    Skeleton,
    View(View),
}

#[derive(Debug)]
struct GateState {
    generation: u64,
    loading: bool,
}

fn finish(state: &Mutex<GateState>, generation: u64) {
    let mut gate = state.lock().unwrap_or_else(PoisonError::into_inner);
    if gate.generation == generation {
        gate.loading = false;
        debug!("Loading gate {} elapsed", generation);
    }
}

/// Simulated loading delay armed on every view entry.
///
/// Re-arming bumps the generation and aborts the pending timer, so an older
/// timer can never clear the flag for a newer entry.
#[derive(Debug)]
pub struct LoadingGate {
    delay: Duration,
    state: Arc<Mutex<GateState>>,
    timer: Option<JoinHandle<()>>,
}

impl LoadingGate {
    pub fn new(delay: Duration) -> Self {
        LoadingGate {
            delay,
            state: Arc::new(Mutex::new(GateState {
                generation: 0,
                loading: false,
            })),
            timer: None,
        }
    }

    pub fn arm(&mut self) {
        let generation = {
            let mut gate = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            gate.generation += 1;
            gate.loading = true;
            gate.generation
        };
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        if self.delay.is_zero() {
            finish(&self.state, generation);
            return;
        }

        match Handle::try_current() {
            Ok(handle) => {
                let state = Arc::clone(&self.state);
                let delay = self.delay;
                self.timer = Some(handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    finish(&state, generation);
                }));
            }
            Err(_) => {
                warn!("No async runtime for the loading gate, clearing immediately");
                finish(&self.state, generation);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .loading
    }
}

impl Drop for LoadingGate {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Tracks the selected view, its transient state, and the loading gate.
#[derive(Debug)]
pub struct Navigator {
    state: ViewState,
    gate: LoadingGate,
    low_data_mode: bool,
}

impl Navigator {
    /// Starts on the feed with the loading gate armed.
    pub fn new(loading_delay: Duration, low_data_mode: bool) -> Self {
        let mut gate = LoadingGate::new(loading_delay);
        gate.arm();
        Navigator {
            state: ViewState::fresh(View::Feed),
            gate,
            low_data_mode,
        }
    }

    pub fn current(&self) -> View {
        self.state.view()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.gate.is_loading()
    }

    pub fn low_data_mode(&self) -> bool {
        self.low_data_mode
    }

    pub fn screen(&self) -> Screen {
        if self.low_data_mode && self.is_loading() {
            Screen::Skeleton
        } else {
            Screen::View(self.current())
        }
    }

    /// Switches to `view`. Selecting the current view changes nothing.
    /// Returns whether the view changed.
    pub fn select(&mut self, view: View) -> bool {
        if view == self.current() {
            return false;
        }
        info!("View {} -> {}", self.current(), view);
        self.state = ViewState::fresh(view);
        self.gate.arm();
        true
    }

    /// Shows the detail view for `project_id`.
    pub fn open_project(&mut self, project_id: impl Into<String>) {
        let project_id = project_id.into();
        self.select(View::Detail);
        if let ViewState::Detail {
            project_id: selected,
            draft,
        } = &mut self.state
        {
            if selected.as_deref() != Some(project_id.as_str()) {
                *selected = Some(project_id);
                *draft = CommentDraft::default();
            }
        }
    }

    /// Feed category filter, `All` when the feed is not selected.
    pub fn category(&self) -> CategoryFilter {
        match &self.state {
            ViewState::Feed { category } => category.clone(),
            _ => CategoryFilter::All,
        }
    }

    /// Returns false when the feed is not selected.
    pub fn set_category(&mut self, filter: CategoryFilter) -> bool {
        match &mut self.state {
            ViewState::Feed { category } => {
                *category = filter;
                true
            }
            _ => false,
        }
    }

    /// Posts sort order, `Latest` when the posts view is not selected.
    pub fn sort_order(&self) -> SortOrder {
        match &self.state {
            ViewState::Posts { order, .. } => *order,
            _ => SortOrder::Latest,
        }
    }

    pub fn set_sort_order(&mut self, new_order: SortOrder) -> bool {
        match &mut self.state {
            ViewState::Posts { order, .. } => {
                *order = new_order;
                true
            }
            _ => false,
        }
    }

    pub fn toggle_sort_order(&mut self) -> Option<SortOrder> {
        match &mut self.state {
            ViewState::Posts { order, .. } => {
                *order = order.toggled();
                Some(*order)
            }
            _ => None,
        }
    }

    /// Flips skill editing on the profile view and returns the new value.
    pub fn toggle_skill_editing(&mut self) -> Option<bool> {
        match &mut self.state {
            ViewState::Profile { editing_skills, .. } => {
                *editing_skills = !*editing_skills;
                Some(*editing_skills)
            }
            _ => None,
        }
    }

    /// Expands one catalog category while editing skills; the same name
    /// again collapses it.
    pub fn toggle_catalog_category(&mut self, name: &str) -> bool {
        match &mut self.state {
            ViewState::Profile {
                editing_skills: true,
                catalog_category,
            } => {
                *catalog_category = match catalog_category.as_deref() {
                    Some(current) if current == name => None,
                    _ => Some(name.to_string()),
                };
                true
            }
            _ => false,
        }
    }

    pub fn comment_draft_mut(&mut self) -> Option<&mut CommentDraft> {
        match &mut self.state {
            ViewState::Detail { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn post_draft_mut(&mut self) -> Option<&mut PostDraft> {
        match &mut self.state {
            ViewState::Posts { draft, .. } => Some(draft),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> Navigator {
        Navigator::new(Duration::ZERO, false)
    }

    #[test]
    fn starts_on_feed() {
        let nav = navigator();
        assert_eq!(nav.current(), View::Feed);
        assert_eq!(nav.category(), CategoryFilter::All);
    }

    #[test]
    fn every_view_reaches_every_other() {
        let mut nav = navigator();
        for from in View::ALL {
            for to in View::ALL {
                nav.select(from);
                nav.select(to);
                assert_eq!(nav.current(), to);
            }
        }
    }

    #[test]
    fn view_names_parse() {
        assert_eq!("posts".parse::<View>(), Ok(View::Posts));
        assert_eq!(
            "settings".parse::<View>(),
            Err(ParseViewError("settings".to_string()))
        );
    }

    #[test]
    fn leaving_a_view_resets_its_state() {
        let mut nav = navigator();
        assert!(nav.set_category(CategoryFilter::parse("IT")));

        nav.select(View::Posts);
        assert!(!nav.set_category(CategoryFilter::parse("Civil")));
        assert_eq!(nav.toggle_sort_order(), Some(SortOrder::Oldest));

        nav.select(View::Feed);
        assert_eq!(nav.category(), CategoryFilter::All);

        nav.select(View::Posts);
        assert_eq!(nav.sort_order(), SortOrder::Latest);
    }

    #[test]
    fn reselecting_current_view_keeps_state() {
        let mut nav = navigator();
        nav.set_category(CategoryFilter::parse("Mechanical"));

        assert!(!nav.select(View::Feed));
        assert_eq!(nav.category(), CategoryFilter::parse("Mechanical"));
    }

    #[test]
    fn skill_editing_only_on_profile() {
        let mut nav = navigator();
        assert_eq!(nav.toggle_skill_editing(), None);

        nav.select(View::Profile);
        assert!(!nav.toggle_catalog_category("Design"));
        assert_eq!(nav.toggle_skill_editing(), Some(true));
        assert!(nav.toggle_catalog_category("Design"));
        assert!(nav.toggle_catalog_category("Design"));
        assert_eq!(
            nav.state(),
            &ViewState::Profile {
                editing_skills: true,
                catalog_category: None
            }
        );

        nav.select(View::Feed);
        nav.select(View::Profile);
        assert_eq!(nav.toggle_skill_editing(), Some(true));
    }

    #[test]
    fn open_project_resets_draft_for_other_project() {
        let mut nav = navigator();
        nav.open_project("1");
        if let Some(draft) = nav.comment_draft_mut() {
            draft.content = "half written".to_string();
        }

        nav.open_project("1");
        assert_eq!(
            nav.comment_draft_mut().map(|d| d.content.clone()),
            Some("half written".to_string())
        );

        nav.open_project("2");
        assert_eq!(
            nav.state(),
            &ViewState::Detail {
                project_id: Some("2".to_string()),
                draft: CommentDraft::default()
            }
        );
    }

    #[test]
    fn without_runtime_gate_clears_immediately() {
        let nav = Navigator::new(Duration::from_millis(1500), true);
        assert!(!nav.is_loading());
        assert_eq!(nav.screen(), Screen::View(View::Feed));
    }

    #[test]
    fn view_state_serializes_with_tag() {
        let value = serde_json::to_value(ViewState::fresh(View::Profile)).expect("serialize");
        assert_eq!(value["view"], "profile");
        assert_eq!(value["editingSkills"], false);
    }
}
