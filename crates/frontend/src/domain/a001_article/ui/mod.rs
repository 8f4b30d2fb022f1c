pub mod details;
pub mod list;

pub use details::ArticleEditor;
pub use list::ArticleList;
