mod client;
mod error;
mod generation;
mod record;

pub use client::*;
pub use error::*;
pub use generation::*;
