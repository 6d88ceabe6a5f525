pub mod bot;
pub mod shared;
pub mod speech;
