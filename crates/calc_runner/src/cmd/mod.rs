pub mod bulk;
pub mod calc;
pub mod search;
