pub mod optional;
pub mod nullable;
pub mod chain;
pub mod error;
#[cfg(feature = "serde")]
mod serde_impl;


pub use optional::*;
pub use nullable::*;
pub use chain::*;
pub use error::*;
