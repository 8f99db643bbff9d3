pub mod item;
pub mod types;
pub mod value;

pub use item::*;
pub use types::*;
pub use value::*;
