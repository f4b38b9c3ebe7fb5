pub mod eval;
pub mod input;
pub mod util;
