pub mod log_only;
pub mod resend;
pub mod smtp;
