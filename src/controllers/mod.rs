pub mod bot;
pub mod health;
pub mod speech;
