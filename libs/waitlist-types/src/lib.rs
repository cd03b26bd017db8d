//! Wire types for the Konecbo waitlist API.
//!
//! This crate provides:
//! - The signup request body (`JoinWaitlistRequest`)
//! - The submission response shape (`SubmissionResult`, `SubmissionStatus`)
//! - API error codes and the count response

mod errors;
mod request;
mod responses;
mod status;

pub use errors::ErrorCode;
pub use request::JoinWaitlistRequest;
pub use responses::{FieldErrors, SubmissionResult, WaitlistCount};
pub use status::SubmissionStatus;
