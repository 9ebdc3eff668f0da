use crate::{DocumentKeywordMap, Occurrence, PostingList};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Moves the last occurrence of `occs` into place, keeping frequencies non-increasing.
///
/// `occs[..len - 1]` must already be sorted. Returns the midpoint indices probed by the
/// binary search, or `None` when the list holds a single occurrence and nothing was searched.
/// On equal frequency the moved occurrence lands before the one it was compared with.
/// With a single predecessor a tie also goes first. Once the search range of a longer
/// list has narrowed to one slot, a tie with that slot goes after it.
pub fn insert_last_occurrence(occs: &mut PostingList) -> Option<Vec<usize>> {
    if occs.len() <= 1 {
        return None;
    }
    let target = occs.pop()?;
    let mut mids = Vec::new();

    if occs.len() == 1 {
        mids.push(0);
        let at = if occs[0].frequency <= target.frequency { 0 } else { 1 };
        occs.insert(at, target);
        return Some(mids);
    }

    // Signed bounds: `last` may step to first - 1, and then `mid` collapses to `first`.
    let mut first: isize = 0;
    let mut last: isize = occs.len() as isize - 1;
    loop {
        let mid = first + (last - first) / 2;
        mids.push(mid as usize);
        let probe = occs[mid as usize].frequency;

        if first >= last {
            let at = if probe >= target.frequency { mid + 1 } else { mid };
            occs.insert(at as usize, target);
            break;
        }
        match probe.cmp(&target.frequency) {
            Ordering::Equal => {
                occs.insert(mid as usize, target);
                break;
            }
            Ordering::Greater => first = mid + 1,
            Ordering::Less => last = mid - 1,
        }
    }
    Some(mids)
}

/// Master index: keyword -> posting list sorted by descending frequency.
#[derive(Debug, Default, Clone)]
pub struct KeywordIndex {
    keywords: HashMap<String, PostingList>,
    num_docs: u32,
}

impl KeywordIndex {
    pub fn new() -> Self { Self::default() }

    /// Folds one document's keywords into the index. Each call counts as one document.
    pub fn merge_keywords(&mut self, kws: DocumentKeywordMap) {
        for (keyword, occ) in kws {
            let occs = self.keywords.entry(keyword).or_default();
            occs.push(occ);
            insert_last_occurrence(occs);
        }
        self.num_docs += 1;
    }

    pub fn get(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    pub fn contains(&self, keyword: &str) -> bool { self.keywords.contains_key(keyword) }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize { self.keywords.len() }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }

    pub fn num_docs(&self) -> u32 { self.num_docs }

    pub fn total_occurrences(&self) -> usize {
        self.keywords.values().map(Vec::len).sum()
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn clear(&mut self) {
        self.keywords.clear();
        self.num_docs = 0;
    }
}
