use dioxus::prelude::*;

/// Scrollable table with a fixed header row.
///
/// Shows `empty_message` in place of the body when `is_empty` is set.
#[component]
pub fn DataTable(
    columns: Vec<String>,
    #[props(default = false)] is_empty: bool,
    #[props(default = "Nothing to show.".to_string())] empty_message: String,
    children: Element,
) -> Element {
    let span = columns.len().max(1);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column}", "{column}" }
                        }
                    }
                }
                tbody {
                    if is_empty {
                        tr {
                            td { class: "data-table-empty", colspan: "{span}", "{empty_message}" }
                        }
                    } else {
                        {children}
                    }
                }
            }
        }
    }
}

#[component]
pub fn DataTableRow(
    #[props(default = false)] highlighted: bool,
    children: Element,
) -> Element {
    rsx! {
        tr { class: "data-table-row", "data-highlighted": highlighted, {children} }
    }
}

#[component]
pub fn DataTableCell(
    #[props(default = false)] numeric: bool,
    children: Element,
) -> Element {
    rsx! {
        td { "data-numeric": numeric, {children} }
    }
}
