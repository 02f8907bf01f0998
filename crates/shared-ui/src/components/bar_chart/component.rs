use dioxus::prelude::*;

/// One bar: its axis label and value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: u32,
}

/// Bar height as a percentage of the tallest bar. Zero when every value is zero.
pub fn bar_height_percent(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(value) / f64::from(max) * 100.0
}

/// Vertical bar chart drawn with CSS, with the value on hover.
///
/// `format_value` renders the tooltip text; defaults to the raw number.
#[component]
pub fn BarChart(
    data: Vec<BarDatum>,
    #[props(default)] format_value: Option<Callback<u32, String>>,
    #[props(default = "12rem".to_string())] height: String,
) -> Element {
    let max = data.iter().map(|d| d.value).max().unwrap_or(0);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "bar-chart", style: "height: {height}",
            for datum in data.iter() {
                {
                    let pct = bar_height_percent(datum.value, max);
                    let shown = match &format_value {
                        Some(format) => format.call(datum.value),
                        None => datum.value.to_string(),
                    };
                    rsx! {
                        div { key: "{datum.label}", class: "bar-chart-column",
                            div { class: "bar-chart-track",
                                div {
                                    class: "bar-chart-bar",
                                    style: "height: {pct:.1}%",
                                    title: "{datum.label}: {shown}",
                                }
                            }
                            span { class: "bar-chart-label", "{datum.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallest_bar_fills_track() {
        assert_eq!(bar_height_percent(4000, 4000), 100.0);
        assert_eq!(bar_height_percent(2000, 4000), 50.0);
    }

    #[test]
    fn all_zero_series_is_flat() {
        assert_eq!(bar_height_percent(0, 0), 0.0);
    }
}
