pub mod arcana;
pub mod reading;

pub use arcana::*;
pub use reading::*;
