pub mod date;
pub mod notify;
