mod ingredient;
mod inventory;
mod name;

pub use ingredient::*;
pub use inventory::*;
pub use name::*;
