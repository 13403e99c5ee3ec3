use dioxus::prelude::*;

use crate::domain::{Destination, DestinationId};
use crate::ui::{
    components::category_badge::{BudgetBadge, SecurityBadge},
    theme,
};

#[component]
pub fn DestinationCard(destination: Destination, on_details: EventHandler<DestinationId>) -> Element {
    let id = destination.id;
    let highlights = destination.card_highlights().to_vec();

    rsx! {
        article {
            class: theme::CARD,
            div { class: "relative h-20 bg-gradient-to-r from-emerald-500 to-teal-600",
                div { class: "absolute right-4 top-4 flex flex-col items-end gap-2",
                    SecurityBadge { security: destination.security }
                    BudgetBadge { budget: destination.budget }
                }
            }

            header { class: "flex items-start justify-between px-6 pb-3 pt-5",
                div {
                    h3 {
                        class: "text-xl font-bold text-gray-800 transition-colors group-hover:text-emerald-600",
                        "{destination.name}"
                    }
                    p { class: "mt-1 text-sm text-gray-600", "📍 {destination.region}" }
                }
                div { class: theme::RATING_PILL,
                    span { "★" }
                    span { "{destination.rating_display()}" }
                }
            }

            div { class: "px-6 pb-6",
                p { class: "mb-4 text-sm text-gray-600 line-clamp-2", "{destination.description}" }

                div { class: "mb-4",
                    p { class: "mb-2 text-sm text-gray-500", "Price Range:" }
                    p { class: "font-semibold text-emerald-600", "{destination.price_range}" }
                }

                if !highlights.is_empty() {
                    div { class: "mb-4",
                        p { class: "mb-2 text-sm text-gray-500", "Highlights:" }
                        div { class: "flex flex-wrap gap-1",
                            for highlight in highlights {
                                span { class: theme::HIGHLIGHT_CHIP, "{highlight}" }
                            }
                        }
                    }
                }

                footer { class: "mt-4 flex items-center justify-between",
                    span { class: "text-sm text-gray-500", "☆ {destination.reviews_display()}" }
                    button {
                        class: theme::BTN_PRIMARY,
                        onclick: move |_| on_details.call(id),
                        "View Details"
                    }
                }
            }
        }
    }
}
