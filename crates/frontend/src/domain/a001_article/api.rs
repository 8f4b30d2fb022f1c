use crate::shared::api_utils::{get_json, path_segment, post_empty, put_json};
use contracts::domain::a001_article::{
    ArticleAction, ArticleDetails, ArticleId, ArticleListResponse, ArticleListType, DraftPayload,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::config::DashboardConfig;

fn article_url(config: &DashboardConfig, id: &ArticleId) -> String {
    config.endpoint(&format!("/article/{}", path_segment(id.as_str())))
}

/// Fetch one article with its publish state
pub async fn fetch_article(
    config: &DashboardConfig,
    id: &ArticleId,
) -> Result<ArticleDetails, ApiError> {
    get_json(&article_url(config, id)).await
}

/// Save the current draft
pub async fn save_draft(
    config: &DashboardConfig,
    id: &ArticleId,
    payload: &DraftPayload,
) -> Result<(), ApiError> {
    put_json(&article_url(config, id), payload).await
}

/// Run publish / unpublish / discard / delete
pub async fn run_action(
    config: &DashboardConfig,
    id: &ArticleId,
    action: ArticleAction,
) -> Result<(), ApiError> {
    let url = format!("{}/{}", article_url(config, id), action.as_str());
    post_empty(&url).await
}

/// Fetch one page of articles of the given status
pub async fn fetch_articles(
    config: &DashboardConfig,
    list_type: ArticleListType,
    start: usize,
    count: usize,
) -> Result<ArticleListResponse, ApiError> {
    let url = config.endpoint(&format!(
        "/articles/{}/{}/{}",
        list_type.as_str(),
        start,
        count
    ));
    get_json(&url).await
}
