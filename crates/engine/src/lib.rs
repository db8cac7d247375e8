mod expr;
mod filter;

pub use expr::{Matcher, SpecExpr, and_, ext, folder, name, not_, or_};
pub use filter::Matches;
