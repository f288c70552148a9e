mod derive;
mod manual;
mod normalize;

pub use derive::*;
pub use manual::*;
pub use normalize::*;
