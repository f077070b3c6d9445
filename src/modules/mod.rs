pub mod health;
pub mod revenue;
