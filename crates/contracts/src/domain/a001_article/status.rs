//! Editor status machine.
//!
//! The editor page keeps one [`EditorState`] and feeds it [`EditorEvent`]s
//! through [`EditorState::reduce`]. The reducer never performs IO; it returns
//! the next state plus an optional [`EditorEffect`] for the caller to run.

use super::aggregate::{ArticleDetails, ArticleStatus};
use chrono::{DateTime, Utc};

pub const TEXT_PUBLISHED: &str = "Published";
pub const TEXT_NOT_PUBLISHED: &str = "Not Published";
pub const TEXT_MODIFIED: &str = "Modified";
pub const TEXT_NOT_MODIFIED: &str = "Not Modified";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    pub status: ArticleStatus,
    pub is_published: bool,
    pub published_date: Option<DateTime<Utc>>,
    pub update_date: Option<DateTime<Utc>>,
    /// Document change guard. Stays `false` until the initial grace delay
    /// elapses, so the editor's own start-up change notification is not saved.
    pub accepting_changes: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    Loaded(ArticleDetails),
    GraceElapsed,
    ContentChanged,
    TitleChanged,
    Saved { at: DateTime<Utc> },
    Published { at: DateTime<Utc> },
    Unpublished,
    Discarded,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEffect {
    /// Save after the document debounce
    ScheduleSave,
    /// Save after the title debounce
    ScheduleTitleSave,
    /// Re-fetch the article from the server
    Reload,
    /// Leave the editor view
    NavigateAway,
}

impl EditorState {
    pub fn from_details(details: &ArticleDetails) -> Self {
        Self {
            status: details.status,
            is_published: details.published,
            published_date: details.published_date,
            update_date: details.article.update_date,
            accepting_changes: false,
        }
    }

    /// Pure transition: event in, next state and optional effect out.
    pub fn reduce(&self, event: EditorEvent) -> (EditorState, Option<EditorEffect>) {
        let mut next = self.clone();
        let effect = match event {
            EditorEvent::Loaded(details) => {
                next = EditorState::from_details(&details);
                None
            }
            EditorEvent::GraceElapsed => {
                next.accepting_changes = true;
                None
            }
            // Only the editor surface fires on its own after a load; title
            // input always comes from the user
            EditorEvent::ContentChanged if !self.accepting_changes => None,
            EditorEvent::ContentChanged => {
                next.status = ArticleStatus::Edited;
                Some(EditorEffect::ScheduleSave)
            }
            EditorEvent::TitleChanged => {
                next.status = ArticleStatus::Edited;
                Some(EditorEffect::ScheduleTitleSave)
            }
            EditorEvent::Saved { at } => {
                next.update_date = Some(at);
                None
            }
            EditorEvent::Published { at } => {
                next.status = ArticleStatus::Published;
                next.is_published = true;
                next.published_date = Some(at);
                next.update_date = Some(at);
                None
            }
            EditorEvent::Unpublished => {
                next.status = ArticleStatus::Draft;
                next.is_published = false;
                None
            }
            EditorEvent::Discarded => Some(EditorEffect::Reload),
            EditorEvent::Deleted => Some(EditorEffect::NavigateAway),
        };
        (next, effect)
    }

    /// Publish status label; depends on the published flag only.
    pub fn article_status_text(&self) -> &'static str {
        article_status_text(self.is_published)
    }

    /// Modification label; depends on the status only.
    pub fn editor_status_text(&self) -> &'static str {
        editor_status_text(self.status)
    }

    pub fn can_publish(&self) -> bool {
        self.status != ArticleStatus::Published || !self.is_published
    }

    pub fn can_unpublish(&self) -> bool {
        self.is_published
    }

    /// Discard only makes sense when there is a published revision to go back to
    pub fn can_discard(&self) -> bool {
        self.is_published && self.status == ArticleStatus::Edited
    }
}

pub fn article_status_text(is_published: bool) -> &'static str {
    if is_published {
        TEXT_PUBLISHED
    } else {
        TEXT_NOT_PUBLISHED
    }
}

pub fn editor_status_text(status: ArticleStatus) -> &'static str {
    match status {
        ArticleStatus::Published => TEXT_NOT_MODIFIED,
        ArticleStatus::Draft | ArticleStatus::Edited => TEXT_MODIFIED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_article::aggregate::ArticleContent;
    use chrono::TimeZone;

    fn state(status: ArticleStatus, is_published: bool) -> EditorState {
        EditorState {
            status,
            is_published,
            ..Default::default()
        }
    }

    fn ready() -> EditorState {
        EditorState::default().reduce(EditorEvent::GraceElapsed).0
    }

    #[test]
    fn test_status_text_matrix() {
        let cases = [
            (ArticleStatus::Draft, false, "Not Published", "Modified"),
            (ArticleStatus::Edited, false, "Not Published", "Modified"),
            (ArticleStatus::Edited, true, "Published", "Modified"),
            (ArticleStatus::Published, true, "Published", "Not Modified"),
        ];
        for (status, is_published, article_text, editor_text) in cases {
            let s = state(status, is_published);
            assert_eq!(s.article_status_text(), article_text, "{:?}/{}", status, is_published);
            assert_eq!(s.editor_status_text(), editor_text, "{:?}/{}", status, is_published);
        }
    }

    #[test]
    fn test_change_before_grace_is_ignored() {
        let loaded = EditorState::default().reduce(EditorEvent::Loaded(ArticleDetails {
            article: ArticleContent::default(),
            status: ArticleStatus::Published,
            published: true,
            published_date: None,
        }));
        assert_eq!(loaded.1, None);

        let (after, effect) = loaded.0.reduce(EditorEvent::ContentChanged);
        assert_eq!(effect, None);
        assert_eq!(after.status, ArticleStatus::Published);
        assert_eq!(after.editor_status_text(), "Not Modified");
    }

    #[test]
    fn test_change_after_grace_marks_edited() {
        let (after, effect) = ready().reduce(EditorEvent::ContentChanged);
        assert_eq!(effect, Some(EditorEffect::ScheduleSave));
        assert_eq!(after.status, ArticleStatus::Edited);

        let (after, effect) = ready().reduce(EditorEvent::TitleChanged);
        assert_eq!(effect, Some(EditorEffect::ScheduleTitleSave));
        assert_eq!(after.status, ArticleStatus::Edited);
    }

    #[test]
    fn test_title_edit_during_grace_is_saved() {
        let (loaded, _) = EditorState::default().reduce(EditorEvent::Loaded(ArticleDetails {
            article: ArticleContent::default(),
            status: ArticleStatus::Published,
            published: true,
            published_date: None,
        }));
        assert!(!loaded.accepting_changes);

        let (after, effect) = loaded.reduce(EditorEvent::TitleChanged);
        assert_eq!(effect, Some(EditorEffect::ScheduleTitleSave));
        assert_eq!(after.status, ArticleStatus::Edited);
        assert_eq!(after.editor_status_text(), "Modified");
    }

    #[test]
    fn test_reload_disarms_guard() {
        let (after, _) = ready().reduce(EditorEvent::Loaded(ArticleDetails::default()));
        assert!(!after.accepting_changes);
    }

    #[test]
    fn test_publish_and_unpublish() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let (edited, _) = ready().reduce(EditorEvent::ContentChanged);

        let (published, effect) = edited.reduce(EditorEvent::Published { at });
        assert_eq!(effect, None);
        assert_eq!(published.status, ArticleStatus::Published);
        assert!(published.is_published);
        assert_eq!(published.published_date, Some(at));
        assert_eq!(published.update_date, Some(at));
        assert!(published.can_unpublish());
        assert!(!published.can_publish());

        let (unpublished, _) = published.reduce(EditorEvent::Unpublished);
        assert_eq!(unpublished.status, ArticleStatus::Draft);
        assert!(!unpublished.is_published);
        assert_eq!(unpublished.article_status_text(), "Not Published");
        assert_eq!(unpublished.editor_status_text(), "Modified");
    }

    #[test]
    fn test_terminal_and_reload_effects() {
        assert_eq!(ready().reduce(EditorEvent::Deleted).1, Some(EditorEffect::NavigateAway));
        assert_eq!(ready().reduce(EditorEvent::Discarded).1, Some(EditorEffect::Reload));
    }

    #[test]
    fn test_discard_availability() {
        assert!(state(ArticleStatus::Edited, true).can_discard());
        assert!(!state(ArticleStatus::Edited, false).can_discard());
        assert!(!state(ArticleStatus::Published, true).can_discard());
    }
}
