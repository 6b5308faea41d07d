pub mod access;
pub mod catalog;
pub mod roles;
pub mod selection;
pub mod summary;
