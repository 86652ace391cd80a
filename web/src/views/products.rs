use dioxus::prelude::*;
use types::mock::PRODUCTS;
use ui::{Button, ButtonSize, ButtonVariant, Card, CardVariant, DataTable, Icon, IconName, Tone};

#[component]
pub fn Products() -> Element {
    rsx! {
        Card { variant: CardVariant::Bento, tone: Tone::Cream,
            div { class: "card-header",
                h3 { class: "card-title", "Kelola Produk" }
                Button { onclick: move |_| tracing::debug!("add product requested"),
                    Icon { name: IconName::Plus }
                    "Tambah Produk"
                }
            }
            DataTable {
                columns: vec!["Produk", "Harga", "Aksi"],
                row_count: PRODUCTS.len(),
                for product in PRODUCTS.iter() {
                    tr { key: "{product.id}",
                        td { "{product.name}" }
                        td { "{product.price_label()}" }
                        td {
                            Button {
                                size: ButtonSize::Sm,
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| tracing::debug!(product = product.id, "edit product requested"),
                                "Edit"
                            }
                        }
                    }
                }
            }
        }
    }
}
