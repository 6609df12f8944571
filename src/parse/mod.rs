pub mod lines;
pub mod nested;
pub mod records;
