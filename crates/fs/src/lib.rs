mod excludes;
mod record;
mod walker;

pub use excludes::ExcludeSet;
pub use record::FileRecord;
pub use walker::walk;
