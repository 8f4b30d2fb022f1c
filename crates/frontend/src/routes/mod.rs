pub mod routes;

pub use routes::{AppRoute, AppRoutes, NEW_ARTICLE_HREF};
