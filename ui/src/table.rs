use dioxus::prelude::*;

use crate::Skeleton;

const SKELETON_ROWS: usize = 3;

/// Table shell with loading, error and empty rows. Rows are passed as
/// children and only rendered once the table is in its loaded state.
#[component]
pub fn DataTable(
    columns: Vec<&'static str>,
    row_count: usize,
    #[props(default)] loading: bool,
    #[props(default)] error: Option<String>,
    #[props(default)] empty: Option<String>,
    children: Element,
) -> Element {
    let span = columns.len().to_string();
    let empty = empty.unwrap_or_else(|| "Tidak ada data".to_string());

    rsx! {
        div { class: "table-container",
            table { class: "table",
                thead {
                    tr {
                        for column in columns.iter() {
                            th { "{column}" }
                        }
                    }
                }
                tbody {
                    if loading {
                        for row in 0..SKELETON_ROWS {
                            tr { key: "{row}",
                                for column in columns.iter() {
                                    td { key: "{column}", Skeleton { class: "skeleton-line" } }
                                }
                            }
                        }
                    } else if let Some(error) = error {
                        tr {
                            td { class: "table-error", colspan: "{span}", role: "alert", "{error}" }
                        }
                    } else if row_count == 0 {
                        tr {
                            td { class: "table-empty", colspan: "{span}", "{empty}" }
                        }
                    } else {
                        {children}
                    }
                }
            }
        }
    }
}
