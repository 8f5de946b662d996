pub mod add;
pub mod dashboard;
pub mod format;
pub mod remove;
pub mod summary;
pub mod update;
