pub mod empty_state;
pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
pub mod popup;
pub mod screen_title;
pub mod suggestion_dropdown;
pub mod vendor_lookup;
