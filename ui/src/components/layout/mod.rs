pub mod app_footer;
pub mod app_header;
pub mod app_layout;
pub mod app_sidebar;
pub mod page_container;
