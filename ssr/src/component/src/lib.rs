pub mod ranking;
pub mod spinner;
pub mod title;
