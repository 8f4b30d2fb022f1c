pub mod editor_surface;
pub mod view_model;

use self::editor_surface::EditorSurface;
use self::view_model::{ArticleEditorViewModel, LoadState};
use crate::routes::AppRoute;
use crate::shared::components::ErrorBanner;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use contracts::domain::a001_article::{ArticleId, ArticleListType};
use leptos::prelude::*;
use thaw::*;

pub const NOT_FOUND_TEXT: &str = "Article not found";

/// Editor page for a single article
#[component]
pub fn ArticleEditor(article_id: ArticleId) -> impl IntoView {
    let vm = ArticleEditorViewModel::new(article_id, use_config());
    vm.load();

    move || match vm.load_state.get() {
        LoadState::Loading => view! {
            <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                <Spinner />
                "Loading..."
            </Flex>
        }
        .into_any(),
        LoadState::NotFound => view! {
            <div class="article-editor__not-found">
                <h2>{NOT_FOUND_TEXT}</h2>
                <a href=AppRoute::ArticleList(ArticleListType::Draft).href()>"Back to drafts"</a>
            </div>
        }
        .into_any(),
        LoadState::Ready => view! { <ArticleEditorForm vm=vm /> }.into_any(),
    }
}

#[component]
fn ArticleEditorForm(vm: ArticleEditorViewModel) -> impl IntoView {
    let state = vm.state;
    let actions_disabled = Signal::derive(move || vm.busy.get());

    let article_badge = move || {
        let s = state.get();
        let color = if s.is_published {
            BadgeColor::Success
        } else {
            BadgeColor::Brand
        };
        view! { <Badge appearance=BadgeAppearance::Tint color=color>{s.article_status_text()}</Badge> }
    };
    let editor_badge = move || {
        let s = state.get();
        view! { <Badge appearance=BadgeAppearance::Outline>{s.editor_status_text()}</Badge> }
    };

    view! {
        <div class="article-editor">
            <div class="article-editor__toolbar">
                <div class="article-editor__status">
                    <span class="article-editor__label">"Article status:"</span>
                    {article_badge}
                    <span class="article-editor__label">"Editor status:"</span>
                    {editor_badge}
                    {move || vm.saving.get().then(|| view! {
                        <span class="article-editor__saving">"Saving..."</span>
                    })}
                </div>
                <Space>
                    {move || state.with(|s| s.can_publish()).then(|| view! {
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.publish() disabled=actions_disabled>
                            {icon("send")}
                            " Publish"
                        </Button>
                    })}
                    {move || state.with(|s| s.can_unpublish()).then(|| view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.unpublish() disabled=actions_disabled>
                            {icon("eye-off")}
                            " Unpublish"
                        </Button>
                    })}
                    {move || state.with(|s| s.can_discard()).then(|| view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.discard() disabled=actions_disabled>
                            {icon("undo")}
                            " Discard changes"
                        </Button>
                    })}
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.delete() disabled=actions_disabled>
                        {icon("trash")}
                        " Delete"
                    </Button>
                </Space>
            </div>

            <ErrorBanner error=vm.error />

            <div class="article-editor__dates">
                {move || {
                    let s = state.get();
                    format!(
                        "Published: {} · Last update: {}",
                        format_timestamp(s.published_date),
                        format_timestamp(s.update_date)
                    )
                }}
            </div>

            <input
                type="text"
                class="article-editor__title"
                placeholder="Title"
                prop:value=move || vm.title.get()
                on:input=move |ev| vm.on_title_input(event_target_value(&ev))
            />

            <EditorSurface
                content=vm.document_text
                revision=vm.revision
                on_change=Callback::new(move |text: String| vm.on_document_change(text))
                disabled=actions_disabled
            />
        </div>
    }
}
