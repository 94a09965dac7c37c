use serde_json::{Map, Value};

/// One converted row: an ordered mapping from header name to string value.
///
/// Backed by `serde_json::Map` with `preserve_order` enabled, so fields keep
/// header order and a duplicate header name overwrites the earlier value
/// while staying in its original position.
pub type Record = Map<String, Value>;

/// Builds a [`Record`] by zipping headers with a row's tokens positionally.
///
/// A row shorter than the header gets empty strings for the missing trailing
/// fields; tokens beyond the header count are dropped. Neither direction is
/// an error. Values are always JSON strings, never coerced to another type.
pub fn map_row(headers: &[String], values: &[String]) -> Record {
    let mut record = Record::new();
    for (i, header) in headers.iter().enumerate() {
        let value = values.get(i).cloned().unwrap_or_default();
        record.insert(header.clone(), Value::String(value));
    }
    record
}

/// Row-inclusion policy: a record qualifies for output only if at least one
/// of its values is non-empty after trimming.
pub fn has_content(record: &Record) -> bool {
    record
        .values()
        .any(|v| v.as_str().is_some_and(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_map_row_zips_positionally() {
        let record = map_row(&headers(&["a", "b"]), &headers(&["1", "2"]));
        assert_eq!(record["a"], Value::String("1".into()));
        assert_eq!(record["b"], Value::String("2".into()));
    }

    #[test]
    fn test_map_row_pads_short_rows() {
        let record = map_row(&headers(&["a", "b", "c"]), &headers(&["1", "2"]));
        assert_eq!(record["c"], Value::String(String::new()));
    }

    #[test]
    fn test_map_row_drops_extra_tokens() {
        let record = map_row(&headers(&["a"]), &headers(&["1", "2", "3"]));
        assert_eq!(record.len(), 1);
        assert_eq!(record["a"], Value::String("1".into()));
    }

    #[test]
    fn test_map_row_duplicate_header_later_wins() {
        let record = map_row(&headers(&["a", "a"]), &headers(&["1", "2"]));
        assert_eq!(record.len(), 1);
        assert_eq!(record["a"], Value::String("2".into()));
    }

    #[test]
    fn test_map_row_preserves_header_order() {
        let record = map_row(&headers(&["z", "a", "m"]), &headers(&["1", "2", "3"]));
        let keys: Vec<&String> = record.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_has_content_all_empty() {
        let record = map_row(&headers(&["a", "b"]), &headers(&["", ""]));
        assert!(!has_content(&record));
    }

    #[test]
    fn test_has_content_whitespace_only_is_empty() {
        let record = map_row(&headers(&["a"]), &[" \t ".to_string()]);
        assert!(!has_content(&record));
    }

    #[test]
    fn test_has_content_one_value_suffices() {
        let record = map_row(&headers(&["a", "b"]), &headers(&["", "x"]));
        assert!(has_content(&record));
    }
}
