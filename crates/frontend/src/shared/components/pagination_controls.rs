use crate::shared::icons::icon;
use contracts::shared::pagination::Paginator;
use leptos::prelude::*;

/// PaginationControls component - prev/next plus a window of page buttons
///
/// The button row comes from [`Paginator::buttons`], so it always shows at
/// least one (disabled) button, even when the listing is empty.
#[component]
pub fn PaginationControls(
    /// Current paginator snapshot
    #[prop(into)]
    paginator: Signal<Paginator>,

    /// Callback when a page button is clicked (0-indexed)
    on_page_change: Callback<usize>,

    /// Callback for the "previous" button
    on_prev: Callback<()>,

    /// Callback for the "next" button
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || !paginator.with(|p| p.has_prev())
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let p = paginator.get();
                let empty = p.total == 0;
                p.buttons()
                    .map(|index| {
                        let is_current = index == p.page;
                        view! {
                            <button
                                class=if is_current { "pagination-btn pagination-btn--active" } else { "pagination-btn" }
                                disabled=empty || is_current
                                on:click=move |_| on_page_change.run(index)
                            >
                                {(index + 1).to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !paginator.with(|p| p.has_next())
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
