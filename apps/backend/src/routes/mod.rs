pub mod grade;
pub mod quiz;
