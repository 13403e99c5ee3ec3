use dioxus::prelude::*;

use crate::domain::{Budget, Category, Security};
use crate::ui::theme;

#[component]
pub fn SecurityBadge(security: Security) -> Element {
    rsx! {
        span {
            class: "{theme::BADGE_BASE} {theme::security_badge(security)}",
            title: security.label(),
            "🛡 {security.value()}"
        }
    }
}

#[component]
pub fn BudgetBadge(budget: Budget) -> Element {
    rsx! {
        span {
            class: "{theme::BADGE_BASE} {theme::budget_badge(budget)}",
            title: budget.label(),
            "$ {budget.value()}"
        }
    }
}
