use dioxus::prelude::*;

use crate::domain::{Category, Destination};
use crate::ui::{
    components::category_badge::{BudgetBadge, SecurityBadge},
    theme,
};

/// Overlay with the full destination record, including every highlight.
#[component]
pub fn DetailPanel(destination: Destination, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/40 p-4",
            onclick: move |_| on_close.call(()),
            div {
                class: "w-full max-w-xl rounded-2xl bg-white p-6 shadow-2xl animate-scale-in",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "mb-4 flex items-start justify-between",
                    div {
                        h3 { class: "text-2xl font-bold text-gray-800", "{destination.name}" }
                        p { class: "text-sm text-gray-500", "📍 {destination.region}" }
                    }
                    button {
                        class: theme::BTN_GHOST,
                        onclick: move |_| on_close.call(()),
                        "✕ Close"
                    }
                }

                div { class: "mb-4 flex flex-wrap items-center gap-2",
                    span { class: theme::RATING_PILL, "★ {destination.rating_display()}" }
                    SecurityBadge { security: destination.security }
                    BudgetBadge { budget: destination.budget }
                    span { class: "text-sm text-gray-500", "{destination.reviews_display()}" }
                }

                p { class: "mb-4 text-gray-700", "{destination.description}" }

                dl { class: "mb-4 grid grid-cols-2 gap-3 text-sm",
                    div {
                        dt { class: "text-gray-500", "Price Range" }
                        dd { class: "font-semibold text-emerald-600", "{destination.price_range}" }
                    }
                    div {
                        dt { class: "text-gray-500", "Budget" }
                        dd { class: "font-medium text-gray-800", "{destination.budget.label()}" }
                    }
                    div {
                        dt { class: "text-gray-500", "Security" }
                        dd { class: "font-medium text-gray-800", "{destination.security.label()}" }
                    }
                }

                if destination.highlights.is_empty() {
                    p { class: "text-sm text-gray-400", "No highlights listed." }
                } else {
                    div {
                        p { class: "mb-2 text-sm text-gray-500", "Highlights:" }
                        ul { class: "flex flex-wrap gap-1",
                            for highlight in destination.highlights.iter() {
                                li { class: theme::HIGHLIGHT_CHIP, "{highlight}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
