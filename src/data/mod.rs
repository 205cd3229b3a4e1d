pub mod availability;
pub mod checker;
pub mod client;
pub mod rooms;
