pub mod header;

use crate::routes::AppRoute;
use header::Header;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title + Drafts / Published)     |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(
    /// Route being rendered; highlights the matching nav link
    active: AppRoute,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header active=active />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
