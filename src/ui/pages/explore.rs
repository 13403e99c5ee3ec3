//! The destination catalogue page: search, filters, results grid.

use dioxus::prelude::*;

use crate::domain::{CatalogueView, DestinationId};
use crate::ui::{
    components::{
        destination_card::DestinationCard, detail_panel::DetailPanel, empty_state::EmptyState,
        filter_panel::FilterPanel,
    },
    theme,
};

#[component]
pub fn ExplorePage() -> Element {
    let mut view = use_context::<Signal<CatalogueView>>();
    let mut selected = use_signal(|| None::<DestinationId>);

    let (destinations, search_term, results_label) = view.with(|v| {
        (
            v.visible().cloned().collect::<Vec<_>>(),
            v.query().search_term.clone(),
            v.results_label(),
        )
    });
    let detail = selected().and_then(|id| view.with(|v| v.destination(id).cloned()));

    rsx! {
        section { class: "relative bg-gradient-to-r from-emerald-600 to-teal-700 text-white",
            div { class: "absolute inset-0 bg-black/20" }
            div { class: "relative mx-auto max-w-6xl px-4 py-16 text-center",
                h1 { class: "mb-4 text-4xl font-bold md:text-6xl animate-fade-in",
                    "Discover Pakistan's Hidden Gems"
                }
                p { class: "mb-8 text-xl text-emerald-100 md:text-2xl animate-fade-in",
                    "Find the perfect destination based on your budget, preferences, and security needs"
                }
                div { class: "relative mx-auto max-w-2xl animate-scale-in",
                    span { class: "absolute left-4 top-1/2 -translate-y-1/2 text-gray-400", "🔍" }
                    input {
                        class: theme::SEARCH_INPUT,
                        r#type: "text",
                        placeholder: "Search destinations or locations...",
                        value: "{search_term}",
                        oninput: move |e| view.with_mut(|v| v.set_search_term(e.value())),
                    }
                }
            }
        }

        div { class: "mx-auto max-w-6xl px-4 py-8",
            FilterPanel {}

            p { class: "mb-6 text-gray-600", "{results_label}" }

            if destinations.is_empty() {
                EmptyState {}
            } else {
                div { class: "grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-3",
                    for destination in destinations {
                        DestinationCard {
                            key: "{destination.id}",
                            destination,
                            on_details: move |id| selected.set(Some(id)),
                        }
                    }
                }
            }
        }

        if let Some(destination) = detail {
            DetailPanel {
                destination,
                on_close: move |_| selected.set(None),
            }
        }
    }
}
