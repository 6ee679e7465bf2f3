pub mod screen_header;
pub mod tab_bar;
