use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

#[component]
pub fn AlertDialogRoot(mut props: prim::AlertDialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: prim::AlertDialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("alert-dialog-content".to_string());
    }

    rsx! {
        prim::AlertDialogContent { ..props }
    }
}

#[component]
pub fn AlertDialogTitle(mut props: prim::AlertDialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-title", None, false));

    rsx! {
        prim::AlertDialogTitle { ..props }
    }
}

#[component]
pub fn AlertDialogDescription(mut props: prim::AlertDialogDescriptionProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "alert-dialog-description",
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogDescription { ..props }
    }
}

#[component]
pub fn AlertDialogActions(mut props: prim::AlertDialogActionsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-actions", None, false));

    rsx! {
        prim::AlertDialogActions { ..props }
    }
}

#[component]
pub fn AlertDialogAction(mut props: prim::AlertDialogActionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-action", None, false));

    rsx! {
        prim::AlertDialogAction { ..props }
    }
}

/// Blocking alert shown while `message` is set. The only way out is "OK",
/// which calls `on_dismiss`; there is no retry.
#[component]
pub fn ErrorAlert(
    #[props(default = "Something went wrong".to_string())] title: String,
    message: Option<String>,
    on_dismiss: EventHandler<()>,
) -> Element {
    let open = message.is_some();
    let text = message.unwrap_or_default();

    rsx! {
        AlertDialogRoot {
            open: open,
            on_open_change: move |now_open: bool| {
                if !now_open {
                    on_dismiss.call(());
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "{title}" }
                AlertDialogDescription { "{text}" }
                AlertDialogActions {
                    AlertDialogAction {
                        on_click: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
