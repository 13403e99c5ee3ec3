pub mod category_badge;
pub mod destination_card;
pub mod detail_panel;
pub mod empty_state;
pub mod filter_panel;
pub mod toast;
