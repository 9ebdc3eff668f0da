use crate::index::KeywordIndex;
use crate::Occurrence;

/// Result size of [`top5_search`].
pub const TOP_K: usize = 5;

/// Documents containing `kw1` or `kw2`, highest frequency first, at most five.
///
/// Keywords are looked up verbatim. Returns `None` when neither keyword is indexed.
pub fn top5_search(index: &KeywordIndex, kw1: &str, kw2: &str) -> Option<Vec<String>> {
    top_k_search(index, kw1, kw2, TOP_K)
}

/// Two-keyword disjunctive merge capped at `k` distinct documents.
///
/// Each posting list is cut to its first `k` entries before merging, so a document
/// ranked below `k` in both lists never shows up. Equal frequencies favour `kw1`.
pub fn top_k_search(index: &KeywordIndex, kw1: &str, kw2: &str, k: usize) -> Option<Vec<String>> {
    let first = index.get(kw1);
    let second = index.get(kw2);
    if first.is_none() && second.is_none() {
        return None;
    }
    let a = head(first, k);
    let b = head(second, k);

    let mut results: Vec<String> = Vec::with_capacity(k);
    let (mut i, mut j) = (0, 0);
    while results.len() < k {
        if i == a.len() {
            drain(&b[j..], &mut results, k);
            break;
        }
        if j == b.len() {
            drain(&a[i..], &mut results, k);
            break;
        }
        if b[j].frequency > a[i].frequency {
            push_distinct(&mut results, &b[j]);
            j += 1;
        } else {
            push_distinct(&mut results, &a[i]);
            i += 1;
        }
    }
    Some(results)
}

fn head(occs: Option<&[Occurrence]>, k: usize) -> &[Occurrence] {
    match occs {
        Some(occs) => &occs[..occs.len().min(k)],
        None => &[],
    }
}

fn drain(rest: &[Occurrence], results: &mut Vec<String>, k: usize) {
    for occ in rest {
        if results.len() == k {
            break;
        }
        push_distinct(results, occ);
    }
}

fn push_distinct(results: &mut Vec<String>, occ: &Occurrence) {
    if !results.iter().any(|d| d == &occ.document) {
        results.push(occ.document.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentKeywordMap;

    fn index_of(entries: &[(&str, &str, u32)]) -> KeywordIndex {
        let mut index = KeywordIndex::new();
        for (keyword, doc, freq) in entries {
            let mut kws = DocumentKeywordMap::new();
            kws.insert(keyword.to_string(), Occurrence::new(*doc, *freq));
            index.merge_keywords(kws);
        }
        index
    }

    #[test]
    fn ties_favour_first_keyword() {
        let index = index_of(&[("cat", "d1", 4), ("cat", "d2", 2), ("dog", "d3", 4), ("dog", "d4", 2)]);
        assert_eq!(top5_search(&index, "cat", "dog").unwrap(), vec!["d1", "d3", "d2", "d4"]);
        assert_eq!(top5_search(&index, "dog", "cat").unwrap(), vec!["d3", "d1", "d4", "d2"]);
    }

    #[test]
    fn absent_keywords() {
        let index = index_of(&[("dog", "d1", 3)]);
        assert_eq!(top5_search(&index, "cat", "bird"), None);
        assert_eq!(top5_search(&index, "cat", "dog").unwrap(), vec!["d1"]);
        assert_eq!(top5_search(&index, "dog", "cat").unwrap(), vec!["d1"]);
    }

    #[test]
    fn shared_documents_appear_once() {
        let index = index_of(&[("cat", "d1", 5), ("dog", "d1", 3), ("dog", "d2", 1)]);
        assert_eq!(top5_search(&index, "cat", "dog").unwrap(), vec!["d1", "d2"]);
        assert_eq!(top5_search(&index, "cat", "cat").unwrap(), vec!["d1"]);
    }

    #[test]
    fn results_are_capped_at_five() {
        let mut entries = Vec::new();
        let docs: Vec<String> = (0..8).map(|n| format!("d{n}")).collect();
        for (n, doc) in docs.iter().enumerate() {
            entries.push(("cat", doc.as_str(), 10 - n as u32));
            entries.push(("dog", doc.as_str(), 10 - n as u32));
        }
        let index = index_of(&entries);
        let hits = top5_search(&index, "cat", "dog").unwrap();
        assert_eq!(hits, vec!["d0", "d1", "d2", "d3", "d4"]);
    }

    #[test]
    fn sixth_ranked_document_is_never_returned() {
        let index = index_of(&[
            ("cat", "c1", 50),
            ("cat", "c2", 40),
            ("cat", "c3", 30),
            ("cat", "c4", 20),
            ("cat", "c5", 10),
            ("cat", "late", 9),
            ("dog", "g1", 1),
        ]);
        let hits = top5_search(&index, "dog", "cat").unwrap();
        assert_eq!(hits, vec!["c1", "c2", "c3", "c4", "c5"]);
        let hits = top_k_search(&index, "cat", "dog", 7).unwrap();
        assert_eq!(hits, vec!["c1", "c2", "c3", "c4", "c5", "late", "g1"]);
    }

    #[test]
    fn zero_k_returns_empty_match() {
        let index = index_of(&[("cat", "d1", 1)]);
        assert_eq!(top_k_search(&index, "cat", "dog", 0), Some(vec![]));
    }
}
