//! Custom test assertions

use std::collections::HashSet;

/// Assert two code collections hold the same codes, ignoring order
#[macro_export]
macro_rules! assert_same_codes {
    ($left:expr, $right:expr) => {
        let left: std::collections::HashSet<String> =
            $left.into_iter().map(|c| c.to_string()).collect();
        let right: std::collections::HashSet<String> =
            $right.into_iter().map(|c| c.to_string()).collect();
        assert_eq!(
            left, right,
            "code sets differ\n  only left: {:?}\n only right: {:?}",
            left.difference(&right).collect::<Vec<_>>(),
            right.difference(&left).collect::<Vec<_>>()
        );
    };
}

/// Assert a collection contains an item matching a predicate
#[macro_export]
macro_rules! assert_contains {
    ($collection:expr, $predicate:expr) => {
        assert!(
            $collection.iter().any($predicate),
            "Collection does not contain expected item"
        );
    };
}

/// Assert compressed output lists wildcards before concrete codes
pub fn assert_wildcards_first(compressed: &[String]) {
    let first_concrete = compressed
        .iter()
        .position(|c| !permset::is_wildcard(c))
        .unwrap_or(compressed.len());
    assert!(
        compressed[first_concrete..]
            .iter()
            .all(|c| !permset::is_wildcard(c)),
        "wildcard after concrete code in {:?}",
        compressed
    );
}

/// Assert compressed output has no duplicate entries
pub fn assert_no_duplicates(compressed: &[String]) {
    let unique: HashSet<&String> = compressed.iter().collect();
    assert_eq!(
        unique.len(),
        compressed.len(),
        "duplicate entries in {:?}",
        compressed
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_same_codes_ignores_order() {
        assert_same_codes!(vec!["a.b", "c.d"], vec!["c.d", "a.b"]);
    }

    #[test]
    #[should_panic(expected = "wildcard after concrete")]
    fn test_assert_wildcards_first_rejects_mixed() {
        assert_wildcards_first(&["a.b".to_string(), "c.*".to_string()]);
    }

    #[test]
    fn test_assert_no_duplicates() {
        assert_no_duplicates(&["a.*".to_string(), "b.c".to_string()]);
    }
}
