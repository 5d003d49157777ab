pub mod catalog;
pub mod sample;
pub mod score;
