use leptos::prelude::*;

/// Textarea bound to an `RwSignal<String>`.
#[component]
pub fn Textarea(
    #[prop(optional, into)]
    label: Option<String>,
    value: RwSignal<String>,
    #[prop(optional, into)]
    placeholder: Option<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {label.map(|l| view! { <label class="form__label">{l}</label> })}
            <textarea
                class="form__textarea"
                placeholder=placeholder.unwrap_or_default()
                disabled=move || disabled.get()
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
