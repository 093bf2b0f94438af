use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Error => "stat-card stat-card--error",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Option<String>,
    #[prop(optional)]
    tone: StatTone,
) -> impl IntoView {
    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
