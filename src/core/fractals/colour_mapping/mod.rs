pub mod errors;
pub mod factory;
pub mod kinds;
pub mod maps;
