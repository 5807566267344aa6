pub mod category;
pub mod common;
pub mod plant;
pub mod shared;
