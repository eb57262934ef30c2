pub mod content;
pub mod uploads;
pub mod users;
