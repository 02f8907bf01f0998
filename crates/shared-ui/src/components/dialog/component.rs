use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;
use dioxus_primitives::dialog as prim;

#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("dialog-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-description", None, false));

    rsx! {
        prim::DialogDescription { ..props }
    }
}

/// Titled dialog with a close button. Dismissing it any way calls `on_close`.
#[component]
pub fn Modal(
    open: bool,
    on_close: EventHandler<()>,
    title: String,
    #[props(default)] description: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        DialogRoot {
            open: open,
            on_open_change: move |now_open: bool| {
                if !now_open {
                    on_close.call(());
                }
            },
            DialogContent {
                div { class: "modal-header",
                    DialogTitle { "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        Icon::<LdX> { icon: LdX, width: 18, height: 18 }
                    }
                }
                if let Some(description) = description {
                    DialogDescription { "{description}" }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}
