use leptos::prelude::*;

/// Labelled checkbox with an optional hint line under the label.
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: String,
    #[prop(optional, into)]
    hint: Option<String>,
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label
            class="form__checkbox-wrapper"
            class:form__checkbox-wrapper--disabled=move || disabled.get()
        >
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="form__checkbox-label">
                <span class="text-strong">{label}</span>
                {hint.map(|h| view! { <span class="form__hint">{h}</span> })}
            </span>
        </label>
    }
}
