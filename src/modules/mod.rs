pub mod access;
pub mod media;
pub mod project;
