//! In-memory content core for a student project-sharing feed: the content
//! store, feed projections, composer drafts, view navigation, and a JSON
//! boundary over actix-web.

pub mod app_state;
pub mod config;
pub mod draft;
pub mod error;
pub mod feed;
pub mod ids;
pub mod models;
pub mod navigation;
pub mod post;
pub mod profile;
pub mod project;
pub mod routes;
pub mod seed;
pub mod store;
pub mod view;

pub use error::{ApiError, StoreError};
pub use store::{CommentTarget, ContentStore, Snapshot};
