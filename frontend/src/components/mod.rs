pub mod handlers;
pub mod header;
pub mod info;
pub mod results;
pub mod upload_section;
pub mod utils;
