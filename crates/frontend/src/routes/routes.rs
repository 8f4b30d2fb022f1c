use crate::domain::a001_article::ui::{ArticleEditor, ArticleList};
use crate::layout::Shell;
use contracts::domain::a001_article::{ArticleId, ArticleListType};
use leptos::prelude::*;
// Each dashboard view is a full page load; no client-side router needed

const ROOT: &str = "/dashboard";

/// Server entry point: creates a draft and redirects to its editor
pub const NEW_ARTICLE_HREF: &str = "/dashboard/article/new";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// `/dashboard/articles/{draft|published}`
    ArticleList(ArticleListType),
    /// `/dashboard/article/edit/{id}`
    ArticleEditor(ArticleId),
}

impl AppRoute {
    /// Resolves a location pathname. Unknown paths land on the drafts list.
    pub fn parse(path: &str) -> Self {
        let rest = path.strip_prefix(ROOT).unwrap_or(path);
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["article", "edit", id] => {
                let id = urlencoding::decode(id)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| id.to_string());
                AppRoute::ArticleEditor(ArticleId::new(id))
            }
            ["articles", kind] => {
                AppRoute::ArticleList(ArticleListType::from_code(kind).unwrap_or_default())
            }
            _ => AppRoute::ArticleList(ArticleListType::Draft),
        }
    }

    pub fn href(&self) -> String {
        match self {
            AppRoute::ArticleList(list_type) => format!("{}/articles/{}", ROOT, list_type.as_str()),
            AppRoute::ArticleEditor(id) => {
                format!("{}/article/edit/{}", ROOT, urlencoding::encode(id.as_str()))
            }
        }
    }

    /// Current browser location
    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::parse(&path)
    }

    /// Full page navigation
    pub fn navigate(&self) {
        let href = self.href();
        log::info!("Navigating to {}", href);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&href) {
                log::error!("Navigation to {} failed: {:?}", href, e);
            }
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let route = AppRoute::current();
    log::debug!("Resolved route: {:?}", route);
    let active = route.clone();

    view! {
        <Shell active=active>
            {match route {
                AppRoute::ArticleList(list_type) => view! { <ArticleList list_type=list_type /> }.into_any(),
                AppRoute::ArticleEditor(id) => view! { <ArticleEditor article_id=id /> }.into_any(),
            }}
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_routes() {
        assert_eq!(
            AppRoute::parse("/dashboard/articles/published"),
            AppRoute::ArticleList(ArticleListType::Published)
        );
        assert_eq!(
            AppRoute::parse("/dashboard/articles/draft/"),
            AppRoute::ArticleList(ArticleListType::Draft)
        );
        assert_eq!(
            AppRoute::parse("/dashboard/articles/unknown"),
            AppRoute::ArticleList(ArticleListType::Draft)
        );
        assert_eq!(
            AppRoute::parse("/dashboard"),
            AppRoute::ArticleList(ArticleListType::Draft)
        );
    }

    #[test]
    fn test_parse_editor_route() {
        assert_eq!(
            AppRoute::parse("/dashboard/article/edit/a%20b"),
            AppRoute::ArticleEditor(ArticleId::from("a b"))
        );
        assert_eq!(
            AppRoute::parse("/dashboard/article/edit/3f2a"),
            AppRoute::ArticleEditor(ArticleId::from("3f2a"))
        );
        // Bare ids and the creation entry point are not editor pages
        assert_eq!(
            AppRoute::parse("/dashboard/article/3f2a"),
            AppRoute::ArticleList(ArticleListType::Draft)
        );
        assert_eq!(
            AppRoute::parse(NEW_ARTICLE_HREF),
            AppRoute::ArticleList(ArticleListType::Draft)
        );
    }

    #[test]
    fn test_href_round_trip() {
        let route = AppRoute::ArticleEditor(ArticleId::from("x/y"));
        assert_eq!(route.href(), "/dashboard/article/edit/x%2Fy");
        assert_eq!(AppRoute::parse(&route.href()), route);
    }
}
