use chrono::{DateTime, Utc};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Opaque article identifier assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Lifecycle status reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Edited,
    Published,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Edited => "edited",
            ArticleStatus::Published => "published",
        }
    }
}

/// Status filter of the listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleListType {
    #[default]
    Draft,
    Published,
}

impl ArticleListType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleListType::Draft => "draft",
            ArticleListType::Published => "published",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" | "drafts" => Some(ArticleListType::Draft),
            "published" => Some(ArticleListType::Published),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ArticleListType::Draft => "Drafts",
            ArticleListType::Published => "Published",
        }
    }
}

impl fmt::Display for ArticleListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions accepted by `POST /article/{id}/{action}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleAction {
    Publish,
    Unpublish,
    Discard,
    Delete,
}

impl ArticleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleAction::Publish => "publish",
            ArticleAction::Unpublish => "unpublish",
            ArticleAction::Discard => "discard",
            ArticleAction::Delete => "delete",
        }
    }
}

impl fmt::Display for ArticleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Article details (GET /article/{id})
// ============================================================================

/// Editable part of an article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub title: String,
    /// Serialized editor document: empty string or JSON text
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub update_date: Option<DateTime<Utc>>,
}

impl ArticleContent {
    /// Parses `data` into a JSON document; `None` for a blank article.
    pub fn document(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        if self.data.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&self.data).map(Some)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleDetails {
    pub article: ArticleContent,
    #[serde(default)]
    pub status: ArticleStatus,
    /// `is_published` flag
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub published_date: Option<DateTime<Utc>>,
}

// ============================================================================
// Draft payload (PUT /article/{id})
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPayload {
    pub title: String,
    /// JSON-encoded document string
    pub data: String,
}

impl DraftPayload {
    pub fn new(title: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            data: data.into(),
        }
    }

    /// Builds a payload from a document snapshot, encoding it as a JSON string.
    pub fn from_document(
        title: impl Into<String>,
        document: &serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            title: title.into(),
            data: serde_json::to_string(document)?,
        })
    }
}

// ============================================================================
// Listing (GET /articles/{type}/{start}/{count})
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleListItem {
    pub id: ArticleId,
    pub title: String,
    pub author: String,
    pub tags: Vec<String>,
    /// Not part of the metadata the listing sends today; shown when present
    pub update_date: Option<DateTime<Utc>>,
    pub published_date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct ArticleSummary {
    #[serde(default)]
    id: Option<ArticleId>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    update_date: Option<DateTime<Utc>>,
    #[serde(default)]
    published_date: Option<DateTime<Utc>>,
}

impl ArticleSummary {
    fn into_item(self, id: ArticleId) -> ArticleListItem {
        ArticleListItem {
            id,
            title: self.title,
            author: self.author,
            tags: self.tags,
            update_date: self.update_date,
            published_date: self.published_date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArticleListResponse {
    #[serde(default, deserialize_with = "deserialize_articles")]
    pub articles: Vec<ArticleListItem>,
    #[serde(default)]
    pub total: usize,
}

/// `articles` is an object keyed by id; key order from the server is kept.
/// An empty page may also arrive as `[]`.
fn deserialize_articles<'de, D>(deserializer: D) -> Result<Vec<ArticleListItem>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ArticlesVisitor;

    impl<'de> Visitor<'de> for ArticlesVisitor {
        type Value = Vec<ArticleListItem>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object of articles keyed by id")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, summary)) = map.next_entry::<String, ArticleSummary>()? {
                items.push(summary.into_item(ArticleId(key)));
            }
            Ok(items)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut items = Vec::new();
            while let Some(summary) = seq.next_element::<ArticleSummary>()? {
                let id = summary
                    .id
                    .clone()
                    .ok_or_else(|| de::Error::missing_field("id"))?;
                items.push(summary.into_item(id));
            }
            Ok(items)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(ArticlesVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_details_decode() {
        let body = json!({
            "article": {
                "title": "Hello",
                "data": "{\"blocks\":[]}",
                "update_date": "2024-03-15T14:02:26Z"
            },
            "status": "edited",
            "published": true,
            "published_date": "2024-03-01T08:00:00Z"
        });
        let details: ArticleDetails = serde_json::from_value(body).unwrap();
        assert_eq!(details.article.title, "Hello");
        assert_eq!(details.status, ArticleStatus::Edited);
        assert!(details.published);
        assert!(details.published_date.is_some());
        assert_eq!(
            details.article.document().unwrap(),
            Some(json!({ "blocks": [] }))
        );
    }

    #[test]
    fn test_blank_document() {
        let content = ArticleContent {
            title: "t".into(),
            data: "  ".into(),
            update_date: None,
        };
        assert_eq!(content.document().unwrap(), None);
    }

    #[test]
    fn test_draft_payload_encodes_data_as_string() {
        let payload = DraftPayload::from_document("Title", &json!({ "blocks": [1] })).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["title"], "Title");
        assert_eq!(value["data"], "{\"blocks\":[1]}");
    }

    #[test]
    fn test_list_keeps_server_order() {
        let body = r#"{
            "articles": {
                "z9": { "title": "Last edited", "author": "ann", "tags": ["rust"], "extra": 1 },
                "a1": { "title": "Older" }
            },
            "total": 42
        }"#;
        let list: ArticleListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(list.total, 42);
        let ids: Vec<&str> = list.articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["z9", "a1"]);
        assert_eq!(list.articles[0].title, "Last edited");
        assert_eq!(list.articles[0].author, "ann");
        assert_eq!(list.articles[0].tags, vec!["rust".to_string()]);
        assert_eq!(list.articles[1].author, "");
        assert!(list.articles[1].update_date.is_none());
    }

    #[test]
    fn test_list_empty_array() {
        let list: ArticleListResponse =
            serde_json::from_str(r#"{ "articles": [], "total": 0 }"#).unwrap();
        assert!(list.articles.is_empty());
        assert_eq!(list.total, 0);
    }

    #[test]
    fn test_list_type_codes() {
        assert_eq!(ArticleListType::from_code("draft"), Some(ArticleListType::Draft));
        assert_eq!(
            ArticleListType::from_code("published"),
            Some(ArticleListType::Published)
        );
        assert_eq!(ArticleListType::from_code("trash"), None);
        assert_eq!(ArticleAction::Unpublish.as_str(), "unpublish");
    }
}
