pub mod field;
pub mod io;
pub mod traits;

pub use self::field::SumField;
pub use self::traits::{ImageView, Rows};
