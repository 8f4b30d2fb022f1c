use crate::routes::AppRoutes;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Dashboard settings are read once and shared through context
    provide_context(load_config());

    view! {
        <AppRoutes />
    }
}
