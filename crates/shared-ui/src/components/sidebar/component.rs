use dioxus::prelude::*;

/// Whether the mobile drawer is showing. Desktop widths always show the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawerState {
    pub open: bool,
}

/// Provides the drawer state to the sidebar and its trigger.
#[component]
pub fn SidebarProvider(children: Element) -> Element {
    let state = use_signal(DrawerState::default);
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-drawer-open": state().open,
            {children}
        }
    }
}

fn use_drawer() -> Signal<DrawerState> {
    use_context::<Signal<DrawerState>>()
}

/// Left navigation column; a slide-in drawer with a backdrop on narrow screens.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut drawer = use_drawer();
    let is_open = drawer().open;

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if is_open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| drawer.set(DrawerState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarNav(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-nav",
            ul { {children} }
        }
    }
}

/// One navigation entry. Selecting it also closes the mobile drawer.
#[component]
pub fn SidebarNavItem(
    label: String,
    #[props(default = false)] active: bool,
    icon: Element,
    onclick: EventHandler<()>,
) -> Element {
    let mut drawer = use_drawer();

    rsx! {
        li {
            button {
                class: "sidebar-nav-item",
                r#type: "button",
                "data-active": active,
                "aria-current": if active { "page" } else { "false" },
                onclick: move |_| {
                    drawer.set(DrawerState { open: false });
                    onclick.call(());
                },
                span { class: "sidebar-nav-icon", {icon} }
                span { "{label}" }
            }
        }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// Hamburger button for the mobile header.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut drawer = use_drawer();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Open menu",
            onclick: move |_| {
                let open = drawer().open;
                drawer.set(DrawerState { open: !open });
            },
            {children}
        }
    }
}

/// Content column next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-inset", {children} }
    }
}
