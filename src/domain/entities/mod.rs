pub mod extraction;
pub mod row;
