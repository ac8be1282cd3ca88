pub mod config;
pub mod logger;
pub mod content;
pub mod post_list;
pub mod reading_time;
pub mod urls;
pub mod view;
mod text_utils;
mod test_data;
