use leptos::prelude::*;

/// Native date picker bound to an ISO `yyyy-mm-dd` string.
/// The browser renders it in the user's locale.
#[component]
pub fn DateInput(
    #[prop(optional, into)]
    label: Option<String>,
    value: RwSignal<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {label.map(|l| view! { <label class="form__label">{l}</label> })}
            <input
                type="date"
                class="form__input"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
