use dioxus::prelude::*;

/// Native `<select>` over `(value, label)` pairs.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    options: Vec<(String, String)>,
    #[props(default)] onchange: Option<EventHandler<String>>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "form-select-field",
            if !label.is_empty() {
                span { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value.clone(),
                disabled: disabled,
                onchange: move |evt: Event<FormData>| {
                    if let Some(handler) = &onchange {
                        handler.call(evt.value());
                    }
                },
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
