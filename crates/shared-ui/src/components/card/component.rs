use dioxus::prelude::*;

/// Rounded white panel that groups related content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

/// Title row of a card with an optional trailing action.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] action: Option<Element>,
) -> Element {
    rsx! {
        header { class: "card-header",
            div {
                h3 { class: "card-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "card-subtitle", "{subtitle}" }
                }
            }
            if let Some(action) = action {
                div { class: "card-action", {action} }
            }
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// A headline number with its label, e.g. "Total Students / 3".
///
/// `icon` is rendered in a tinted square on the right; `hint` is a small
/// caption under the value.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: Option<String>,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { class: "card stat-card",
            div { class: "stat-card-body",
                p { class: "stat-card-label", "{label}" }
                p { class: "stat-card-value", "{value}" }
                if let Some(hint) = hint {
                    p { class: "stat-card-hint", "{hint}" }
                }
            }
            if let Some(icon) = icon {
                div { class: "stat-card-icon", {icon} }
            }
        }
    }
}
