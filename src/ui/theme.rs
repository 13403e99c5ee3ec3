//! Shared class strings so cards, badges and controls stay consistent.

use crate::domain::{Budget, Security};

// ============================================
// BADGES
// ============================================

pub fn security_badge(security: Security) -> &'static str {
    match security {
        Security::High => "bg-green-100 text-green-800 hover:bg-green-200",
        Security::Medium => "bg-yellow-100 text-yellow-800 hover:bg-yellow-200",
        Security::Low => "bg-red-100 text-red-800 hover:bg-red-200",
    }
}

pub fn budget_badge(budget: Budget) -> &'static str {
    match budget {
        Budget::Low => "bg-blue-100 text-blue-800 hover:bg-blue-200",
        Budget::Medium => "bg-purple-100 text-purple-800 hover:bg-purple-200",
        Budget::High => "bg-orange-100 text-orange-800 hover:bg-orange-200",
    }
}

pub const BADGE_BASE: &str =
    "inline-flex items-center gap-1 rounded-full px-2.5 py-0.5 text-xs font-semibold capitalize";

pub const HIGHLIGHT_CHIP: &str =
    "inline-flex items-center rounded-full bg-gray-100 px-2 py-0.5 text-xs text-gray-700";

pub const RATING_PILL: &str =
    "flex items-center gap-1 rounded-full bg-emerald-100 px-2 py-1 text-sm font-semibold text-emerald-800";

// ============================================
// CONTROLS
// ============================================

pub const SEARCH_INPUT: &str = "w-full rounded-full border-0 bg-white/95 py-4 pl-12 pr-4 text-lg text-gray-800 shadow-lg focus:outline-none focus:ring-2 focus:ring-emerald-300";

pub const SELECT: &str = "w-full rounded-lg border border-gray-200 bg-white px-3 py-2 text-sm text-gray-800 focus:border-emerald-500 focus:outline-none";

pub const FIELD_LABEL: &str = "mb-2 block text-sm font-medium text-gray-700";

pub const BTN_OUTLINE: &str = "w-full rounded-lg border border-gray-300 bg-white px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-50";

pub const BTN_PRIMARY: &str = "rounded-lg bg-emerald-600 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-700";

pub const BTN_GHOST: &str = "rounded-lg border border-gray-200 px-3 py-1 text-sm text-gray-500 hover:bg-gray-100 hover:text-gray-800";

// ============================================
// PANELS
// ============================================

pub const PANEL: &str = "mb-8 rounded-2xl bg-white/80 p-6 shadow-lg backdrop-blur-sm animate-fade-in";

pub const CARD: &str = "group overflow-hidden rounded-2xl bg-white/90 shadow-md backdrop-blur-sm transition-all duration-300 hover:-translate-y-2 hover:shadow-2xl animate-fade-in";
