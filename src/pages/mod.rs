pub mod check_availability;
pub mod date_range;
pub mod home;
pub mod notifications;
pub mod room;
