pub mod confirm_modal;
pub mod settings_form;
pub mod speed_chart;
pub mod stats_summary;
pub mod status_panel;
pub mod top_bar;
