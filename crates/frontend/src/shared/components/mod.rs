pub mod bar_chart;
pub mod date_input;
pub mod stat_card;
pub mod toast;
pub mod ui;
