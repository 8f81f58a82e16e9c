mod error;
pub use error::ExecError;

mod status;
pub use status::exit_from_status;

#[cfg(feature = "subprocess")]
pub mod subprocess;
