use leptos::prelude::*;

/// Inline error message; renders nothing while `error` is `None`
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-banner__icon">"⚠"</span>
                    <span class="error-banner__text">{err}</span>
                </div>
            }
        })
    }
}
