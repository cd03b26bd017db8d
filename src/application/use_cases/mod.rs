pub mod notification;
pub mod waitlist;
