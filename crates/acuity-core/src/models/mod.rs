pub mod ai;
pub mod insight;
pub mod request;
pub mod result;
