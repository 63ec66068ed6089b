pub mod handlers;
pub mod header;
pub mod modal;
pub mod report_panel;
pub mod results;
pub mod sidebar;
pub mod upload_section;
pub mod utils;
