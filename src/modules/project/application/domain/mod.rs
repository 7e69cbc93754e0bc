pub mod entities;
pub mod tag_filter;
