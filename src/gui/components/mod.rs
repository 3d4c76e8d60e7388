//! Reusable pieces of the widget window

pub mod countdown_display;
pub mod title_date_dialog;
