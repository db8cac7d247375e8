use sift_fs::FileRecord;

/// Boolean expression over record matchers.
///
/// Trees are built once through [`and_`], [`or_`], [`not_`] and the leaf
/// builders, then evaluated any number of times; no node is mutated after
/// construction, so one tree can serve many filter passes.
///
/// Composition is always an explicit nested call, never an overloaded
/// operator, so the shape of a tree is visible at the call site.
#[derive(Debug, Clone)]
pub enum SpecExpr {
    /// True when every child is true. An empty child list is vacuously true.
    And(Vec<SpecExpr>),
    /// True when at least one child is true. An empty child list is false.
    Or(Vec<SpecExpr>),
    Not(Box<SpecExpr>),
    Leaf(Matcher),
}

/// Leaf predicate over one field of a [`FileRecord`].
///
/// Terms are lowercased at construction; a leaf is satisfied when any of
/// its terms occurs as a substring of the lowercased field.
#[derive(Debug, Clone)]
pub enum Matcher {
    Name(Vec<String>),
    Folder(Vec<String>),
    Ext(Vec<String>),
}

impl SpecExpr {
    /// Evaluate this tree against one record.
    ///
    /// Children evaluate strictly left-to-right in construction order,
    /// stopping at the first false for `And` and the first true for `Or`.
    pub fn is_satisfied(&self, record: &FileRecord) -> bool {
        match self {
            SpecExpr::And(children) => children.iter().all(|c| c.is_satisfied(record)),
            SpecExpr::Or(children) => children.iter().any(|c| c.is_satisfied(record)),
            SpecExpr::Not(inner) => !inner.is_satisfied(record),
            SpecExpr::Leaf(matcher) => matcher.matches(record),
        }
    }
}

impl Matcher {
    fn matches(&self, record: &FileRecord) -> bool {
        match self {
            Matcher::Name(terms) => contains_any(&record.file_name.to_lowercase(), terms),
            Matcher::Ext(terms) => contains_any(&record.extension.to_lowercase(), terms),
            Matcher::Folder(terms) => record
                .folder_names
                .iter()
                .any(|segment| contains_any(&segment.to_lowercase(), terms)),
        }
    }
}

// Every path through a matcher ends in an explicit bool; a no-match loop
// is false, never an absent value.
fn contains_any(haystack: &str, terms: &[String]) -> bool {
    terms.iter().any(|term| haystack.contains(term.as_str()))
}

/// All children must hold.
pub fn and_<I>(children: I) -> SpecExpr
where
    I: IntoIterator<Item = SpecExpr>,
{
    SpecExpr::And(children.into_iter().collect())
}

/// At least one child must hold.
pub fn or_<I>(children: I) -> SpecExpr
where
    I: IntoIterator<Item = SpecExpr>,
{
    SpecExpr::Or(children.into_iter().collect())
}

/// The child must not hold.
pub fn not_(child: SpecExpr) -> SpecExpr {
    SpecExpr::Not(Box::new(child))
}

/// File name contains any of `terms` (case-insensitive).
pub fn name<I, S>(terms: I) -> SpecExpr
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SpecExpr::Leaf(Matcher::Name(lowercase_terms(terms)))
}

/// Any folder segment contains any of `terms` (case-insensitive).
pub fn folder<I, S>(terms: I) -> SpecExpr
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SpecExpr::Leaf(Matcher::Folder(lowercase_terms(terms)))
}

/// Extension contains any of `terms` (case-insensitive).
pub fn ext<I, S>(terms: I) -> SpecExpr
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SpecExpr::Leaf(Matcher::Ext(lowercase_terms(terms)))
}

fn lowercase_terms<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .map(|t| t.as_ref().to_lowercase())
        .collect()
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
