use dioxus::{logger::tracing, prelude::*};

use crate::cluster::databases::{sample_databases, DatabaseRow};
use crate::components::{DatabaseNameCell, DiskSizeCell, IndexRecCell, SearchBox};

const DATABASES_CSS: Asset = asset!("/assets/styling/databases.css");

#[component]
pub fn Databases() -> Element {
    let databases = use_signal(sample_databases);
    // The filter applied to the table. Only committed queries land here;
    // keystrokes alone never change it.
    let mut applied_filter = use_signal(String::new);

    let query = applied_filter();
    let visible: Vec<DatabaseRow> = databases()
        .into_iter()
        .filter(|db| query.is_empty() || db.name.to_lowercase().contains(&query.to_lowercase()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: DATABASES_CSS }
        div { class: "databases-container",
            div { class: "databases-header",
                h1 { "Databases" }
                div { class: "header-controls",
                    SearchBox {
                        placeholder: "Search databases".to_string(),
                        on_submit: move |q: String| {
                            tracing::debug!("applying database filter: {:?}", q);
                            applied_filter.set(q);
                        },
                        on_clear: move |_| applied_filter.set(String::new())
                    }
                    span { class: "database-count", "{visible.len()} databases" }
                }
            }

            table { class: "databases-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Tables" }
                        th { "Disk Size" }
                        th { "Index Recommendations" }
                    }
                }
                tbody {
                    {visible.iter().map(|db| {
                        rsx! {
                            tr { key: "{db.name}",
                                td { DatabaseNameCell { database: db.clone() } }
                                td { "{db.table_count}" }
                                td { DiskSizeCell { database: db.clone() } }
                                td { IndexRecCell { database: db.clone() } }
                            }
                        }
                    })}
                }
            }
        }
    }
}
