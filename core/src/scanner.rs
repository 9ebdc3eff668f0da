use crate::error::{Error, Result};
use crate::tokenizer::{get_keyword, lossy_lines, split_line, NoiseFilter};
use crate::{DocumentKeywordMap, Occurrence};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Counts keyword hits over the lines of one document.
pub fn scan_lines<I, S, N>(doc_id: &str, lines: I, noise: &N) -> DocumentKeywordMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    N: NoiseFilter + ?Sized,
{
    let mut kws = DocumentKeywordMap::new();
    for line in lines {
        scan_line(doc_id, line.as_ref(), noise, &mut kws);
    }
    kws
}

fn scan_line<N: NoiseFilter + ?Sized>(doc_id: &str, line: &str, noise: &N, kws: &mut DocumentKeywordMap) {
    // Readers only break on `\n`; a bare `\r` ends a line as well.
    for segment in line.split('\r') {
        for token in split_line(segment) {
            let Some(keyword) = get_keyword(token, noise) else { continue };
            kws.entry(keyword)
                .and_modify(|occ| occ.frequency += 1)
                .or_insert_with(|| Occurrence::new(doc_id, 1));
        }
    }
}

/// Scans a buffered reader line by line. Invalid UTF-8 only spoils the tokens it touches;
/// genuine read failures abort the scan.
pub fn scan_reader<R: BufRead, N: NoiseFilter + ?Sized>(doc_id: &str, reader: R, noise: &N) -> std::io::Result<DocumentKeywordMap> {
    let mut kws = DocumentKeywordMap::new();
    for line in lossy_lines(reader) {
        scan_line(doc_id, &line?, noise, &mut kws);
    }
    Ok(kws)
}

/// Opens `path` and builds its keyword map. The path string doubles as the document id.
pub fn load_keywords_from_document<N: NoiseFilter + ?Sized>(path: &str, noise: &N) -> Result<DocumentKeywordMap> {
    let f = File::open(Path::new(path)).map_err(|e| Error::open_document(path, e))?;
    scan_reader(path, BufReader::new(f), noise).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoiseWords;

    #[test]
    fn aggregates_hits_per_keyword() {
        let noise: NoiseWords = ["the"].into_iter().collect();
        let kws = scan_lines("d1.txt", ["The quick brown fox. The quick fox!"], &noise);
        assert_eq!(kws.len(), 3);
        assert_eq!(kws["quick"], Occurrence::new("d1.txt", 2));
        assert_eq!(kws["brown"], Occurrence::new("d1.txt", 1));
        assert_eq!(kws["fox"], Occurrence::new("d1.txt", 2));
    }

    #[test]
    fn counts_across_lines_and_carriage_returns() {
        let noise = NoiseWords::new();
        let kws = scan_reader("doc", "fox\r\nfox\rfox  fox\n".as_bytes(), &noise).unwrap();
        assert_eq!(kws["fox"].frequency, 4);
    }

    #[test]
    fn tabs_do_not_separate_tokens() {
        let noise = NoiseWords::new();
        let kws = scan_lines("doc", ["fox\tdog cat"], &noise);
        assert_eq!(kws.len(), 1);
        assert!(kws.contains_key("cat"));
    }

    #[test]
    fn invalid_utf8_only_drops_the_affected_token() {
        let noise = NoiseWords::new();
        let kws = scan_reader("doc", &b"caf\xe9 fox fox\n\xff\xfe dog.\r\n"[..], &noise).unwrap();
        assert_eq!(kws.len(), 2);
        assert_eq!(kws["fox"].frequency, 2);
        assert_eq!(kws["dog"].frequency, 1);
    }

    #[test]
    fn empty_document_yields_empty_map() {
        let noise = NoiseWords::new();
        assert!(scan_reader("doc", "".as_bytes(), &noise).unwrap().is_empty());
    }

    #[test]
    fn missing_document_is_reported() {
        let noise = NoiseWords::new();
        let err = load_keywords_from_document("/definitely/not/here.txt", &noise).unwrap_err();
        assert!(matches!(err, Error::DocumentNotFound { .. }));
    }
}
