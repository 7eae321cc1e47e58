pub mod arrange;
pub mod check;
