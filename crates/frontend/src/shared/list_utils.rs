/// Утилиты для списков: поиск, подсветка совпадений, поле поиска с debounce
use crate::shared::timers::{now_ms, sleep_until};
use contracts::shared::debounce::Debouncer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::ops::Range;

/// Filters shorter than this are ignored
pub const MIN_FILTER_LEN: usize = 3;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

pub fn is_filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if !is_filter_active(filter) {
        return items.to_vec();
    }
    let filter = filter.trim();
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Case-insensitive substring test
pub fn contains_ignore_case(text: &str, filter: &str) -> bool {
    text.to_lowercase().contains(&filter.to_lowercase())
}

/// Byte ranges of case-insensitive matches of `filter` in `text`.
/// Empty when lowercasing changes byte lengths (offsets would not line up).
pub fn match_ranges(text: &str, filter: &str) -> Vec<Range<usize>> {
    let filter = filter.trim();
    if !is_filter_active(filter) {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push(start..end);
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for range in ranges {
        if range.start > last_pos {
            parts.push(view! { <span>{text[last_pos..range.start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[range.clone()].to_string()}</mark> }.into_any());
        last_pos = range.end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Debounce delay
    debounce_ms: u32,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search titles (min. 3 characters)...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(String::new());
    let debouncer = StoredValue::new(Debouncer::new(debounce_ms as u64));

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let Some(ticket) = debouncer.try_update_value(|d| d.trigger(now_ms())) else {
            return;
        };
        spawn_local(async move {
            sleep_until(ticket.due_at_ms).await;
            let fire = debouncer
                .try_update_value(|d| d.fire(ticket, now_ms()))
                .unwrap_or(false);
            if fire {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        debouncer.update_value(|d| d.cancel());
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || if is_filter_active(&input_value.get()) { "search-input__field search-input__field--active" } else { "search-input__field" }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ignore_case(self.0, filter)
        }
    }

    #[test]
    fn test_short_filter_is_ignored() {
        let rows = vec![Row("Alpha"), Row("Beta")];
        assert_eq!(filter_list(&rows, "al"), rows);
        assert_eq!(filter_list(&rows, "   "), rows);
    }

    #[test]
    fn test_filter_list() {
        let rows = vec![Row("Release notes"), Row("Roadmap"), Row("NOTES archive")];
        assert_eq!(
            filter_list(&rows, "notes"),
            vec![Row("Release notes"), Row("NOTES archive")]
        );
        assert!(filter_list(&rows, "zzz").is_empty());
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Notes and notes", "NOTES"), vec![0..5, 10..15]);
        assert!(match_ranges("Notes", "no").is_empty());
    }
}
