pub mod artifact;
pub mod error;
pub mod launcher;
pub mod platform;
pub mod runtime;

pub use artifact::VERSION;
pub use launcher::launch;
