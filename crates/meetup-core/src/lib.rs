//! Failure taxonomy and resource assembly contract for Simple Meetup.
//!
//! # Modules
//!
//! - [`error`] -- [`AppError`], its [`ErrorKind`] taxonomy, and the
//!   [`InvalidResourceError`] signal raised when a resource cannot be
//!   assembled.
//! - [`assembler`] -- [`ResourceAssembler`] trait implemented by
//!   application code that turns entities into resources.

pub mod assembler;
pub mod error;

pub use assembler::ResourceAssembler;
pub use error::{AppError, BoxError, ErrorKind, InvalidResourceError};
