pub mod health;
pub mod scores;
