use super::editor_surface::{document_to_text, text_to_document};
use crate::domain::a001_article::api;
use crate::routes::AppRoute;
use crate::shared::timers::{now_ms, sleep_until};
use chrono::Utc;
use contracts::domain::a001_article::{
    ArticleAction, ArticleDetails, ArticleId, ArticleListType, DraftPayload, EditorEffect,
    EditorEvent, EditorState,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::config::DashboardConfig;
use contracts::shared::debounce::{DebounceTicket, Debouncer};
use contracts::shared::sequence::Sequencer;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    NotFound,
    Ready,
}

/// Builds the PUT body from the title and the editor text
pub fn draft_payload(title: &str, text: &str) -> Result<DraftPayload, ApiError> {
    match text_to_document(text) {
        None => Ok(DraftPayload::new(title, "")),
        Some(document) => DraftPayload::from_document(title, &document)
            .map_err(|e| ApiError::Encode(e.to_string())),
    }
}

/// Whether pending debounced saves are dropped once `action` has finished.
/// A failed discard or delete keeps them so recent edits still reach the server.
pub fn drops_pending_saves(action: ArticleAction, succeeded: bool) -> bool {
    succeeded && matches!(action, ArticleAction::Discard | ArticleAction::Delete)
}

/// Which debouncer a scheduled save belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveChannel {
    Document,
    Title,
}

/// ViewModel for the article editor page
#[derive(Clone, Copy)]
pub struct ArticleEditorViewModel {
    pub article_id: StoredValue<ArticleId>,
    config: StoredValue<DashboardConfig>,
    pub load_state: RwSignal<LoadState>,
    pub title: RwSignal<String>,
    pub document_text: RwSignal<String>,
    /// Incremented on every successful load
    pub revision: RwSignal<u64>,
    pub state: RwSignal<EditorState>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    load_sequencer: StoredValue<Sequencer>,
    document_debounce: StoredValue<Debouncer>,
    title_debounce: StoredValue<Debouncer>,
}

impl ArticleEditorViewModel {
    pub fn new(article_id: ArticleId, config: DashboardConfig) -> Self {
        let delay = config.title_debounce_ms as u64;
        Self {
            article_id: StoredValue::new(article_id),
            config: StoredValue::new(config),
            load_state: RwSignal::new(LoadState::Loading),
            title: RwSignal::new(String::new()),
            document_text: RwSignal::new(String::new()),
            revision: RwSignal::new(0),
            state: RwSignal::new(EditorState::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            busy: RwSignal::new(false),
            load_sequencer: StoredValue::new(Sequencer::new()),
            document_debounce: StoredValue::new(Debouncer::new(delay)),
            title_debounce: StoredValue::new(Debouncer::new(delay)),
        }
    }

    /// Load the article; a response to a superseded load is dropped
    pub fn load(&self) {
        let vm = *self;
        let Some(token) = self.load_sequencer.try_update_value(|s| s.issue()) else {
            return;
        };
        let id = self.article_id.get_value();
        let config = self.config.get_value();

        spawn_local(async move {
            let result = api::fetch_article(&config, &id).await;
            if !vm.load_sequencer.with_value(|s| s.is_current(token)) {
                log::debug!("Dropping stale load of article {}", id);
                return;
            }

            match result {
                Ok(details) => {
                    log::info!("Loaded article {} ({})", id, details.status.as_str());
                    vm.apply_loaded(details);

                    // Change notifications before the grace delay are the
                    // editor settling, not user edits
                    TimeoutFuture::new(config.grace_delay_ms).await;
                    if vm.load_sequencer.with_value(|s| s.is_current(token)) {
                        vm.dispatch(EditorEvent::GraceElapsed);
                    }
                }
                Err(e) => {
                    log::error!("Failed to load article {}: {}", id, e);
                    vm.load_state.set(LoadState::NotFound);
                }
            }
        });
    }

    fn apply_loaded(&self, details: ArticleDetails) {
        let text = match details.article.document() {
            Ok(document) => document_to_text(document.as_ref()),
            Err(e) => {
                log::warn!("Article document is not valid JSON, showing raw data: {}", e);
                details.article.data.clone()
            }
        };
        self.title.set(details.article.title.clone());
        self.document_text.set(text);
        self.dispatch(EditorEvent::Loaded(details));
        if self.load_state.get_untracked() != LoadState::Ready {
            self.load_state.set(LoadState::Ready);
        }
        self.revision.update(|r| *r += 1);
    }

    /// Feed an event through the status machine and run the resulting effect
    pub fn dispatch(&self, event: EditorEvent) {
        let (next, effect) = self.state.with_untracked(|s| s.reduce(event));
        self.state.set(next);
        if let Some(effect) = effect {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: EditorEffect) {
        match effect {
            EditorEffect::ScheduleSave => self.schedule_save(SaveChannel::Document),
            EditorEffect::ScheduleTitleSave => self.schedule_save(SaveChannel::Title),
            EditorEffect::Reload => self.load(),
            EditorEffect::NavigateAway => {
                AppRoute::ArticleList(ArticleListType::Draft).navigate();
            }
        }
    }

    pub fn on_document_change(&self, text: String) {
        self.document_text.set(text);
        self.dispatch(EditorEvent::ContentChanged);
    }

    pub fn on_title_input(&self, title: String) {
        self.title.set(title);
        self.dispatch(EditorEvent::TitleChanged);
    }

    fn debouncer(&self, channel: SaveChannel) -> StoredValue<Debouncer> {
        match channel {
            SaveChannel::Document => self.document_debounce,
            SaveChannel::Title => self.title_debounce,
        }
    }

    fn schedule_save(&self, channel: SaveChannel) {
        let vm = *self;
        let debouncer = self.debouncer(channel);
        let Some(ticket) = debouncer.try_update_value(|d| d.trigger(now_ms())) else {
            return;
        };
        spawn_local(async move {
            vm.fire_when_due(channel, ticket).await;
        });
    }

    async fn fire_when_due(self, channel: SaveChannel, ticket: DebounceTicket) {
        sleep_until(ticket.due_at_ms).await;
        let fire = self
            .debouncer(channel)
            .try_update_value(|d| d.fire(ticket, now_ms()))
            .unwrap_or(false);
        if fire {
            self.save_now().await;
        }
    }

    fn has_pending_save(&self) -> bool {
        self.document_debounce.with_value(|d| d.is_pending())
            || self.title_debounce.with_value(|d| d.is_pending())
    }

    fn cancel_pending_saves(&self) {
        self.document_debounce.update_value(|d| d.cancel());
        self.title_debounce.update_value(|d| d.cancel());
    }

    /// PUT the current draft. Failures alert the user; the editor content is kept.
    async fn save_now(self) -> bool {
        let id = self.article_id.get_value();
        let config = self.config.get_value();
        let payload = match draft_payload(
            &self.title.get_untracked(),
            &self.document_text.get_untracked(),
        ) {
            Ok(payload) => payload,
            Err(e) => {
                self.report_save_failure(&id, &e);
                return false;
            }
        };

        self.saving.set(true);
        let result = api::save_draft(&config, &id, &payload).await;
        self.saving.set(false);

        match result {
            Ok(()) => {
                log::debug!("Saved article {}", id);
                self.dispatch(EditorEvent::Saved { at: Utc::now() });
                true
            }
            Err(e) => {
                self.report_save_failure(&id, &e);
                false
            }
        }
    }

    fn report_save_failure(&self, id: &ArticleId, e: &ApiError) {
        log::error!("Failed to save article {}: {}", id, e);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!("Failed to save article: {}", e));
        }
    }

    pub fn publish(&self) {
        self.run_action(ArticleAction::Publish);
    }

    pub fn unpublish(&self) {
        self.run_action(ArticleAction::Unpublish);
    }

    pub fn discard(&self) {
        if self.confirm("Discard all changes since the last publication?") {
            self.run_action(ArticleAction::Discard);
        }
    }

    pub fn delete(&self) {
        if self.confirm("Delete this article permanently?") {
            self.run_action(ArticleAction::Delete);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    /// Runs an article action. Publishing saves pending edits first and a
    /// failed save aborts it.
    fn run_action(&self, action: ArticleAction) {
        let vm = *self;
        let id = self.article_id.get_value();
        let config = self.config.get_value();
        self.busy.set(true);
        self.error.set(None);

        spawn_local(async move {
            if matches!(action, ArticleAction::Publish) && vm.has_pending_save() {
                vm.cancel_pending_saves();
                if !vm.save_now().await {
                    vm.busy.set(false);
                    return;
                }
            }

            let result = api::run_action(&config, &id, action).await;
            vm.busy.set(false);
            if drops_pending_saves(action, result.is_ok()) {
                vm.cancel_pending_saves();
            }

            match result {
                Ok(()) => {
                    log::info!("Article {}: {} done", id, action);
                    let event = match action {
                        ArticleAction::Publish => EditorEvent::Published { at: Utc::now() },
                        ArticleAction::Unpublish => EditorEvent::Unpublished,
                        ArticleAction::Discard => EditorEvent::Discarded,
                        ArticleAction::Delete => EditorEvent::Deleted,
                    };
                    vm.dispatch(event);
                }
                Err(e) => {
                    log::error!("Failed to {} article {}: {}", action, id, e);
                    vm.error.set(Some(format!("Failed to {} article: {}", action, e)));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_action_keeps_pending_saves() {
        assert!(!drops_pending_saves(ArticleAction::Delete, false));
        assert!(!drops_pending_saves(ArticleAction::Discard, false));
        assert!(drops_pending_saves(ArticleAction::Delete, true));
        assert!(drops_pending_saves(ArticleAction::Discard, true));
        assert!(!drops_pending_saves(ArticleAction::Unpublish, true));
    }

    #[test]
    fn test_blank_document_saves_empty_data() {
        let payload = draft_payload("Title", "   ").unwrap();
        assert_eq!(payload, DraftPayload::new("Title", ""));
    }

    #[test]
    fn test_json_document_is_compacted() {
        let payload = draft_payload("T", "{\n  \"blocks\": []\n}").unwrap();
        assert_eq!(payload.data, "{\"blocks\":[]}");
    }

    #[test]
    fn test_plain_text_becomes_json_string() {
        let payload = draft_payload("T", "hello").unwrap();
        assert_eq!(payload.data, "\"hello\"");
    }
}
