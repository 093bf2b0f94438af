use leptos::prelude::*;

/// Value used by filter selects for "no restriction".
pub const ALL_OPTION: &str = "all";

/// Native select bound to a string value.
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options as (value, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {label.map(|l| view! { <label class="form__label">{l}</label> })}
            <select
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Options for a filter select: an "all" entry followed by `labels`, each
/// label doubling as its value.
pub fn filter_options<'a>(all_label: &str, labels: impl IntoIterator<Item = &'a str>) -> Vec<(String, String)> {
    std::iter::once((ALL_OPTION.to_string(), all_label.to_string()))
        .chain(labels.into_iter().map(|l| (l.to_string(), l.to_string())))
        .collect()
}

/// Maps the selected filter value back to `None` for "all".
pub fn filter_value(selected: &str) -> Option<&str> {
    (selected != ALL_OPTION).then_some(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_options_start_with_all() {
        let options = filter_options("Todos os status", ["Ativo", "Inativo"]);
        assert_eq!(options[0], ("all".to_string(), "Todos os status".to_string()));
        assert_eq!(options[2], ("Inativo".to_string(), "Inativo".to_string()));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_filter_value() {
        assert_eq!(filter_value("all"), None);
        assert_eq!(filter_value("Ativo"), Some("Ativo"));
    }
}
