pub use crate::util::*;

pub mod burrow;
pub mod util;
