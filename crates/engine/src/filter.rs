use log::debug;
use sift_fs::FileRecord;

use crate::expr::SpecExpr;

/// Lazy stream of records satisfying a specification tree.
///
/// Records are yielded in input order and the input is never buffered, so
/// the consumer may stop pulling at any point. The match counter lives on
/// the iterator and is incremented on every yield: [`Matches::matched`] is
/// only meaningful once the stream has been driven to exhaustion. A
/// consumer that abandons the stream early never observes the final count.
pub struct Matches<'a, I> {
    records: I,
    spec: &'a SpecExpr,
    matched: usize,
}

impl<'a, I> Matches<'a, I>
where
    I: Iterator<Item = FileRecord>,
{
    pub fn new(records: I, spec: &'a SpecExpr) -> Self {
        Matches {
            records,
            spec,
            matched: 0,
        }
    }

    /// Number of records yielded so far.
    pub fn matched(&self) -> usize {
        self.matched
    }
}

impl<I> Iterator for Matches<'_, I>
where
    I: Iterator<Item = FileRecord>,
{
    type Item = FileRecord;

    fn next(&mut self) -> Option<FileRecord> {
        for record in self.records.by_ref() {
            if self.spec.is_satisfied(&record) {
                self.matched += 1;
                debug!("[filter] match #{}: {:?}", self.matched, record.file_path);
                return Some(record);
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
