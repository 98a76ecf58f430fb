pub(crate) mod metrics;
pub(crate) mod trace_root;

use once_cell::sync::Lazy;
use regex::Regex;

static ID_SEGMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\d+(/|$)").expect("Invalid id segment regex"));

/// Collapses numeric path segments so metric labels stay low-cardinality.
pub(crate) fn normalize_uri(path: &str) -> String {
    let path = path.split('?').next().unwrap_or(path);
    ID_SEGMENT_REGEX.replace_all(path, "/{id}$1").to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_uri;

    #[test]
    fn normalize_uri_test() {
        let ok_str = normalize_uri("/todos/12345");
        assert_eq!(ok_str, "/todos/{id}");
    }

    #[test]
    fn normalize_uri_keeps_collection_path() {
        assert_eq!(normalize_uri("/todos"), "/todos");
        assert_eq!(normalize_uri("/health"), "/health");
    }

    #[test]
    fn normalize_uri_drops_query() {
        assert_eq!(normalize_uri("/todos/7?verbose=true"), "/todos/{id}");
    }
}
