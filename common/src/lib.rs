mod constants;
mod field;
mod food;
mod snake;
mod types;

pub mod util;

pub use constants::*;
pub use field::*;
pub use food::*;
pub use snake::*;
pub use types::*;
pub use util::PseudoRandom;
