use crate::shared::format::{format_value, ValueFormat};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    #[prop(into)]
    value: Signal<f64>,
    format: ValueFormat,
    /// Extra modifier, e.g. "success" -> `stat-card--success`
    #[prop(optional, into)]
    variant: Option<String>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let class = match variant {
        Some(v) => format!("stat-card stat-card--{}", v),
        None => "stat-card".to_string(),
    };

    let formatted = move || format_value(value.get(), format);

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
