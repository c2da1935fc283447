pub mod catalog;
pub mod substitution;
pub mod waste;

pub use catalog::{CATALOG, Category, SubstitutionEntry};
pub use substitution::{Substitution, SubstitutionCatalog};
pub use waste::{WASTE_PRONE, WasteProneClassifier};
