pub mod catalog;
pub mod course;
pub mod data_core;
