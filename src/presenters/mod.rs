pub mod file;
pub mod position_label;
