pub mod avatar_stack;
pub mod button;
pub mod checkbox;
pub mod progress_bar;
pub mod search_bar;
pub mod switch;
pub mod text_field;
