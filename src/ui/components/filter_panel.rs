use dioxus::prelude::*;

use crate::domain::{
    budget_filter_label, security_filter_label, Budget, CatalogueView, Category, CategoryFilter,
    Security, SortKey,
};
use crate::ui::{
    components::toast::{push_toast, ToastKind, ToastMessage},
    theme,
};

#[component]
pub fn FilterPanel() -> Element {
    let mut view = use_context::<Signal<CatalogueView>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let query = view.with(|v| v.query().clone());

    let budget_options: Vec<_> = std::iter::once(CategoryFilter::All)
        .chain(Budget::ALL.into_iter().map(CategoryFilter::Only))
        .map(|filter| (filter.value(), budget_filter_label(filter), filter == query.budget))
        .collect();
    let security_options: Vec<_> = std::iter::once(CategoryFilter::All)
        .chain(Security::ALL.into_iter().map(CategoryFilter::Only))
        .map(|filter| (filter.value(), security_filter_label(filter), filter == query.security))
        .collect();
    let sort_options: Vec<_> = SortKey::OPTIONS
        .into_iter()
        .map(|key| (key.value(), key.label(), key == query.sort_by))
        .collect();

    let on_clear = move |_| {
        let was_default = view.with(|v| v.query().is_default());
        view.with_mut(|v| v.clear_filters());
        if !was_default {
            push_toast(toasts, ToastKind::Info, "Filters cleared.");
        }
    };

    rsx! {
        section { class: theme::PANEL,
            div { class: "mb-4 flex items-center gap-2",
                span { class: "text-emerald-600", "⚙" }
                h2 { class: "text-lg font-semibold text-gray-800", "Filters & Sorting" }
            }

            div { class: "grid grid-cols-1 gap-4 md:grid-cols-4",
                div {
                    label { class: theme::FIELD_LABEL, "Budget" }
                    select {
                        class: theme::SELECT,
                        onchange: move |e| {
                            view.with_mut(|v| v.apply_budget_value(&e.value())).ok();
                        },
                        for (value, label, selected) in budget_options {
                            option { value: value, selected: selected, "{label}" }
                        }
                    }
                }

                div {
                    label { class: theme::FIELD_LABEL, "Security Level" }
                    select {
                        class: theme::SELECT,
                        onchange: move |e| {
                            view.with_mut(|v| v.apply_security_value(&e.value())).ok();
                        },
                        for (value, label, selected) in security_options {
                            option { value: value, selected: selected, "{label}" }
                        }
                    }
                }

                div {
                    label { class: theme::FIELD_LABEL, "Sort By" }
                    select {
                        class: theme::SELECT,
                        onchange: move |e| view.with_mut(|v| v.apply_sort_value(&e.value())),
                        for (value, label, selected) in sort_options {
                            option { value: value, selected: selected, "{label}" }
                        }
                    }
                }

                div { class: "flex items-end",
                    button { class: theme::BTN_OUTLINE, onclick: on_clear, "Clear Filters" }
                }
            }
        }
    }
}
