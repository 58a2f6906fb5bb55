pub mod generate;
pub mod suppliers;
