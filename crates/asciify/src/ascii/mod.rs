pub mod document;
pub mod gradient;
pub mod grid;
pub mod mapping;
