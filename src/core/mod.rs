pub mod constants;
pub mod driver;
pub mod field;
pub mod text;

pub use driver::*;
pub use field::*;
pub use text::*;
