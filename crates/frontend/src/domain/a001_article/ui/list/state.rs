use crate::shared::date_utils::format_timestamp;
use crate::shared::list_utils::{contains_ignore_case, filter_list, Searchable};
use contracts::domain::a001_article::{ArticleListItem, ArticleListResponse, ArticleListType};
use contracts::shared::config::DashboardConfig;
use contracts::shared::pagination::Paginator;
use leptos::prelude::*;

impl Searchable for ArticleListItem {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.title, filter)
    }
}

#[derive(Clone, Debug)]
pub struct ArticleListState {
    pub list_type: ArticleListType,
    pub articles: Vec<ArticleListItem>,
    /// Page of the last successful load; counters and buttons read from it
    pub paginator: Paginator,
    pub search: String,
    pub is_loaded: bool,
}

/// Values shown in the counters line above the list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListCounters {
    pub current_count: usize,
    pub total_count: usize,
    /// 1-based
    pub current_page: usize,
    pub total_pages: usize,
}

impl ArticleListState {
    pub fn new(list_type: ArticleListType, config: &DashboardConfig) -> Self {
        Self {
            list_type,
            articles: Vec::new(),
            paginator: Paginator::new(config.page_size, config.max_page_buttons),
            search: String::new(),
            is_loaded: false,
        }
    }

    /// Page a navigation step would land on, or `None` when it is a no-op.
    /// The displayed page is left alone until that page has loaded.
    pub fn target_page(&self, step: impl FnOnce(&mut Paginator) -> bool) -> Option<usize> {
        let mut next = self.paginator.clone();
        step(&mut next).then_some(next.page)
    }

    /// Item offset of `page`
    pub fn offset_of(&self, page: usize) -> usize {
        page * self.paginator.count
    }

    /// Full replace with a freshly loaded page
    pub fn apply_page(&mut self, page: usize, response: ArticleListResponse) {
        self.paginator.page = page;
        self.paginator.set_total_items(response.total);
        self.articles = response.articles;
        self.is_loaded = true;
    }

    /// Articles of the current page that pass the search filter
    pub fn visible(&self) -> Vec<ArticleListItem> {
        filter_list(&self.articles, &self.search)
    }

    pub fn counters(&self) -> ListCounters {
        ListCounters {
            current_count: self.articles.len(),
            total_count: self.paginator.total_items,
            current_page: self.paginator.page + 1,
            total_pages: self.paginator.total.max(1),
        }
    }
}

/// Secondary line of a list row: author, tags and whichever dates the
/// listing carried
pub fn row_meta(article: &ArticleListItem) -> String {
    let mut parts = Vec::new();
    if !article.author.trim().is_empty() {
        parts.push(format!("by {}", article.author));
    }
    if !article.tags.is_empty() {
        parts.push(article.tags.join(", "));
    }
    if let Some(date) = article.update_date {
        parts.push(format!("Updated {}", format_timestamp(Some(date))));
    }
    if let Some(date) = article.published_date {
        parts.push(format!("Published {}", format_timestamp(Some(date))));
    }
    parts.join(" · ")
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state(
    list_type: ArticleListType,
    config: &DashboardConfig,
) -> RwSignal<ArticleListState> {
    RwSignal::new(ArticleListState::new(list_type, config))
}
