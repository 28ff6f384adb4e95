use dioxus::prelude::*;

use crate::cluster::metrics::sample_catalog;
use crate::components::MetricSelect;

const METRICS_CSS: Asset = asset!("/assets/styling/metrics.css");

/// Custom chart page: pick a metric from the catalog; the chart itself is
/// rendered by a layer outside this console.
#[component]
pub fn Metrics() -> Element {
    let catalog = use_signal(sample_catalog);
    // Value of the picked metric, empty until one is chosen.
    let mut selected = use_signal(String::new);

    let current = selected();
    let detail = catalog()
        .into_iter()
        .find(|option| !current.is_empty() && option.value == current);

    let detail_panel = match detail {
        Some(option) => rsx! {
            div { class: "metric-detail",
                h3 { "{option.label}" }
                p { class: "metric-detail-value", "{option.value}" }
                p { class: "metric-detail-description", "{option.description}" }
            }
        },
        None => rsx! {
            p { class: "metric-detail-empty", "Select a metric to chart." }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: METRICS_CSS }
        div { class: "metrics-container",
            div { class: "metrics-header",
                h1 { "Custom Chart" }
            }

            MetricSelect {
                selected: current,
                options: catalog(),
                on_change: move |value: String| selected.set(value)
            }

            {detail_panel}
        }
    }
}
