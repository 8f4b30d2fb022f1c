pub mod state;

use self::state::{create_state, row_meta};
use crate::domain::a001_article::api;
use crate::routes::AppRoute;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a001_article::{ArticleListItem, ArticleListType};
use contracts::shared::sequence::Sequencer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub const EMPTY_STATE_TEXT: &str = "No articles found";

/// Paginated listing of drafts or published articles
#[component]
pub fn ArticleList(list_type: ArticleListType) -> impl IntoView {
    let config = StoredValue::new(use_config());
    let state = create_state(list_type, &config.get_value());
    let sequencer = StoredValue::new(Sequencer::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_page = move |page: usize| {
        let Some(token) = sequencer.try_update_value(|s| s.issue()) else {
            return;
        };
        let (start, count) = state.with_untracked(|s| (s.offset_of(page), s.paginator.count));
        let config = config.get_value();
        set_loading.set(true);

        spawn_local(async move {
            let result = api::fetch_articles(&config, list_type, start, count).await;

            // A newer request was issued meanwhile; its response wins
            if !sequencer.with_value(|s| s.is_current(token)) {
                log::debug!(
                    "Dropping stale {} page response (start={}, token={})",
                    list_type,
                    start,
                    token.value()
                );
                return;
            }
            set_loading.set(false);

            match result {
                Ok(response) => {
                    log::debug!(
                        "Loaded {} {} articles of {}",
                        response.articles.len(),
                        list_type,
                        response.total
                    );
                    set_error.set(None);
                    state.update(|s| s.apply_page(page, response));
                }
                Err(e) => {
                    log::error!("Failed to load {} articles at {}: {}", list_type, start, e);
                    set_error.set(Some(format!("Failed to load articles: {}", e)));
                }
            }
        });
    };

    // Load on mount
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_page(0);
        }
    });
    let refresh = move || load_page(state.with_untracked(|s| s.paginator.page));

    let next_page = Callback::new(move |_: ()| {
        if let Some(page) = state.with_untracked(|s| s.target_page(|p| p.next_page())) {
            load_page(page);
        }
    });
    let prev_page = Callback::new(move |_: ()| {
        if let Some(page) = state.with_untracked(|s| s.target_page(|p| p.prev_page())) {
            load_page(page);
        }
    });
    let goto_page = Callback::new(move |target: usize| {
        if let Some(page) = state.with_untracked(|s| s.target_page(|p| p.goto_page(target))) {
            load_page(page);
        }
    });
    let on_search = Callback::new(move |value: String| {
        state.update(|s| s.search = value);
    });

    let paginator = Signal::derive(move || state.with(|s| s.paginator.clone()));
    let search = move || state.with(|s| s.search.clone());

    view! {
        <div class="article-list">
            <PageHeader title=list_type.title().to_string()>
                <Space>
                    <SearchInput on_change=on_search debounce_ms=config.with_value(|c| c.search_debounce_ms) />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh() disabled=loading>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </PageHeader>

            <ErrorBanner error=error />

            <div class="article-list__counters">
                {move || {
                    let c = state.with(|s| s.counters());
                    format!(
                        "Showing {} of {} articles · Page {} of {}",
                        c.current_count, c.total_count, c.current_page, c.total_pages
                    )
                }}
            </div>

            <PaginationControls
                paginator=paginator
                on_page_change=goto_page
                on_prev=prev_page
                on_next=next_page
            />

            {move || {
                if loading.get() && !state.with(|s| s.is_loaded) {
                    return view! {
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                            <Spinner />
                            "Loading..."
                        </Flex>
                    }.into_any();
                }

                let articles = state.with(|s| s.visible());
                if articles.is_empty() {
                    return view! {
                        <div class="article-list__empty">{EMPTY_STATE_TEXT}</div>
                    }.into_any();
                }

                let filter = search();
                view! {
                    <ul class="article-list__items">
                        {articles
                            .into_iter()
                            .map(|article| view! { <ArticleRow article=article filter=filter.clone() /> })
                            .collect_view()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn ArticleRow(article: ArticleListItem, filter: String) -> impl IntoView {
    let href = AppRoute::ArticleEditor(article.id.clone()).href();
    let title = if article.title.trim().is_empty() {
        "(untitled)".to_string()
    } else {
        article.title.clone()
    };
    let meta = row_meta(&article);

    view! {
        <li class="article-list__item">
            <a class="article-list__link" href=href>
                {highlight_matches(&title, &filter)}
            </a>
            {(!meta.is_empty()).then(|| view! {
                <span class="article-list__meta">{meta}</span>
            })}
        </li>
    }
}
