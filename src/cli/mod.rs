pub mod recommend;
pub mod substitute;
pub mod waste;
