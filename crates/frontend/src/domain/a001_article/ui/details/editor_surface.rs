//! Document editing surface.
//!
//! Stand-in for a rich-text widget. The editor page only relies on the
//! capability every such widget offers: load an initial document, report
//! content changes, and hand back a snapshot of the current document.

use leptos::prelude::*;
use serde_json::Value;

/// Text shown for a loaded document
pub fn document_to_text(document: Option<&Value>) -> String {
    match document {
        None => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Snapshot of the current text as a JSON document; `None` when blank. Text
/// that is not JSON is kept as a JSON string so the saved `data` is always
/// valid JSON.
pub fn text_to_document(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}

#[component]
pub fn EditorSurface(
    /// Current document text; replaced wholesale when an article is (re)loaded
    #[prop(into)]
    content: Signal<String>,
    /// Bumped on each (re)load so the surface reports the loaded content
    #[prop(into)]
    revision: Signal<u64>,
    /// Fired for every content change, including the one after a load
    on_change: Callback<String>,
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    // Like real widgets, report the freshly loaded document once it is rendered
    Effect::new(move |prev: Option<u64>| {
        let rev = revision.get();
        if prev != Some(rev) && rev > 0 {
            on_change.run(content.get_untracked());
        }
        rev
    });

    view! {
        <textarea
            class="editor-surface"
            spellcheck="true"
            prop:value=move || content.get()
            disabled=move || disabled.get()
            on:input=move |ev| on_change.run(event_target_value(&ev))
        ></textarea>
    }
}
