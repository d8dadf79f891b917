mod category;
mod changes;
mod matrix;

pub use category::{Category, PathPattern};
pub use changes::ChangeSet;
pub use matrix::{Matrix, MatrixEntry, MatrixPlan, SkipReason, SkippedLanguage, VersionCatalog};
