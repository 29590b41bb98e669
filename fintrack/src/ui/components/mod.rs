pub mod empty_state;
pub mod entry_form;
pub mod help_bar;
pub mod help_popup;
pub mod incomplete_request;
pub mod popup;
pub mod screen_title;
pub mod session_header;
