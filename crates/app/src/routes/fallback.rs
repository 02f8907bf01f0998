use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdClock;
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent};

/// Shown when the tab has no view for this role.
#[component]
pub fn ModuleNotFound(tab: String) -> Element {
    let message = format!(r#"Module "{tab}" not found."#);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./fallback.css") }
        div { class: "fallback",
            div { class: "fallback-code", "404" }
            p { class: "fallback-message", "{message}" }
        }
    }
}

/// Shown for a menu tab while only dashboards are enabled.
#[component]
pub fn WorkInProgress(tab: String) -> Element {
    let message = format!(r#"The "{tab}" module is not available yet."#);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./fallback.css") }
        Card { class: "fallback-card",
            CardContent {
                div { class: "fallback",
                    Icon::<LdClock> { icon: LdClock, width: 40, height: 40 }
                    h2 { class: "fallback-title", "Work in progress" }
                    p { class: "fallback-message", "{message}" }
                }
            }
        }
    }
}

#[component]
pub fn UnknownRole() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./fallback.css") }
        div { class: "fallback",
            p { class: "fallback-message", "Unknown Role" }
        }
    }
}
