use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// A labelled bar with the value printed on the right, e.g. "Mathematics  92%".
///
/// `percent` is clamped to 0-100.
#[component]
pub fn LabeledProgress(label: String, percent: f64, #[props(default)] caption: Option<String>) -> Element {
    let percent = percent.clamp(0.0, 100.0);
    let shown = caption.unwrap_or_else(|| format!("{percent:.0}%"));

    rsx! {
        div { class: "labeled-progress",
            div { class: "labeled-progress-row",
                span { "{label}" }
                span { class: "labeled-progress-value", "{shown}" }
            }
            Progress {
                value: Some(percent),
                ProgressIndicator {}
            }
        }
    }
}
