pub mod viewer;
pub mod color;
