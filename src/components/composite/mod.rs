pub mod card_header;
pub mod file_grid_item;
pub mod file_item;
pub mod file_preview_modal;
pub mod modal;
pub mod offline_promo_card;
pub mod placeholder_screen;
pub mod recent_item_card;
pub mod storage_usage_card;
pub mod team_folder_card;
