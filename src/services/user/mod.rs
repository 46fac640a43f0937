pub mod delete;
pub mod index;
pub mod store;
pub mod update;
