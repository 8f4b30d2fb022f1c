pub mod api_error;
pub mod config;
pub mod debounce;
pub mod pagination;
pub mod sequence;
