pub mod email_provider;
pub mod waitlist_entry;
