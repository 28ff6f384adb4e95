use dioxus::{logger::tracing, prelude::*};

use crate::cluster::metrics::{filter_options, MetricOption};

#[derive(Props, PartialEq, Clone)]
pub struct MetricSelectProps {
    /// Value of the currently picked metric, empty when none is picked.
    pub selected: String,
    pub options: Vec<MetricOption>,
    pub on_change: EventHandler<String>,
}

/// Searchable metric picker: a filter input over the catalog, option rows
/// showing label and description, and a clear button once a metric is
/// picked.
#[component]
pub fn MetricSelect(props: MetricSelectProps) -> Element {
    let mut open = use_signal(|| false);
    let mut filter = use_signal(String::new);

    let query = filter();
    let visible: Vec<MetricOption> = filter_options(&props.options, &query)
        .into_iter()
        .cloned()
        .collect();
    let placeholder = props
        .options
        .iter()
        .find(|o| o.value == props.selected)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| "Select a metric...".to_string());
    let has_selection = !props.selected.is_empty();
    let on_change = props.on_change;

    let empty_state = if visible.is_empty() {
        rsx! {
            div { class: "metric-select-empty", "No results found" }
        }
    } else {
        rsx! {}
    };

    let dropdown = if open() {
        rsx! {
            div { class: "metric-select-dropdown",
                {empty_state}
                {visible.iter().map(|option| {
                    let value = option.value.clone();
                    rsx! {
                        div {
                            key: "{option.value}",
                            class: "metric-select-option",
                            onclick: move |_| {
                                tracing::debug!("metric selected: {}", value);
                                on_change.call(value.clone());
                                open.set(false);
                                filter.set(String::new());
                            },
                            div { class: "metric-select-option-label", "{option.label}" }
                            div { class: "metric-select-option-description", "{option.description}" }
                        }
                    }
                })}
            }
        }
    } else {
        rsx! {}
    };

    let clear_button = if has_selection {
        rsx! {
            button {
                class: "metric-select-clear",
                r#type: "button",
                onclick: move |_| {
                    filter.set(String::new());
                    on_change.call(String::new());
                },
                "✕"
            }
        }
    } else {
        rsx! {}
    };

    rsx! {
        div { class: "metric-select",
            div { class: "metric-select-control",
                input {
                    class: "metric-select-input",
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{query}",
                    onfocusin: move |_| open.set(true),
                    oninput: move |evt| {
                        filter.set(evt.value());
                        open.set(true);
                    }
                }
                {clear_button}
            }
            {dropdown}
        }
    }
}
