pub mod collector;
pub mod panels;
pub mod summary;
