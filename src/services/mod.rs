pub mod analysis;
pub mod converter;
pub mod excel;
