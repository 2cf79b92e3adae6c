pub mod input;
pub mod select;

pub use input::NumberInput;
pub use select::Select;
