// HTML components rendered with maud
pub mod announcement_banner;
pub mod dashboard_page;
pub mod embed_frame;
pub mod page_header;
pub mod stat_card;
