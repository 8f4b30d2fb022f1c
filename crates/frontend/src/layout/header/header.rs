use crate::routes::{AppRoute, NEW_ARTICLE_HREF};
use crate::shared::icons::icon;
use contracts::domain::a001_article::ArticleListType;
use leptos::prelude::*;

#[component]
pub fn Header(active: AppRoute) -> impl IntoView {
    let nav_link = move |list_type: ArticleListType| {
        let route = AppRoute::ArticleList(list_type);
        let class = if active == route {
            "header__link header__link--active"
        } else {
            "header__link"
        };
        view! {
            <a class=class href=route.href()>{list_type.title()}</a>
        }
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{icon("file-text")}" Articles"</span>
                <nav class="header__nav">
                    {nav_link(ArticleListType::Draft)}
                    {nav_link(ArticleListType::Published)}
                </nav>
                // Full page load; the server creates the draft and redirects
                <a class="header__link header__link--new" href=NEW_ARTICLE_HREF>
                    {icon("plus")}" New article"
                </a>
            </div>
        </header>
    }
}
