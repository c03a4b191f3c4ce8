pub mod domain;
pub mod entity;
pub mod infrastructure;
