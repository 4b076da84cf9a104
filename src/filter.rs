//! Filter expression parsing and evaluation.
//!
//! A filter is one free-form string typed by the user. Expressions like:
//! - `age >= 30`
//! - `name = Alice`
//! - `score < 9.5`
//! are classified as structured comparisons; anything else falls back to a
//! case-insensitive substring search over the record's JSON rendering.
//! Parsing is total: there is no such thing as an invalid filter.

use crate::value::Value;

/// Comparison operators, listed in scan order.
///
/// Two-character operators are tried before their one-character prefixes so
/// `a >= b` never splits as `a >` / `= b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Ge, // >=
    Le, // <=
    Ne, // !=
    Eq, // =
    Gt, // >
    Lt, // <
}

const SCAN_ORDER: [CompareOp; 6] = [
    CompareOp::Ge,
    CompareOp::Le,
    CompareOp::Ne,
    CompareOp::Eq,
    CompareOp::Gt,
    CompareOp::Lt,
];

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Ge => ">=",
            CompareOp::Le => "<=",
            CompareOp::Ne => "!=",
            CompareOp::Eq => "=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
        }
    }
}

/// Classification of one filter string.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `field <op> literal`
    Comparison {
        field: String,
        op: CompareOp,
        literal: String,
    },
    /// Not a structured expression; evaluate by substring containment.
    Unparsed,
}

/// Parse a filter string into a predicate.
///
/// For each operator in scan order, the first occurrence of the operator's
/// leading character is probed; if the text at that position is exactly the
/// operator, the expression splits there. A predicate is cheap and
/// recomputed on every evaluation pass rather than stored.
pub fn parse(expr: &str) -> Predicate {
    let trimmed = expr.trim();

    for op in SCAN_ORDER {
        let symbol = op.symbol();
        let head = &symbol[..1];
        if let Some(pos) = trimmed.find(head) {
            if trimmed[pos..].starts_with(symbol) {
                return Predicate::Comparison {
                    field: trimmed[..pos].trim().to_string(),
                    op,
                    literal: trimmed[pos + symbol.len()..].trim().to_string(),
                };
            }
        }
    }

    Predicate::Unparsed
}

/// Evaluate a filter string against one record.
///
/// An empty filter matches everything. A structured comparison on a missing
/// field, or on a record that is not an object, is false rather than an
/// error.
pub fn matches(record: &Value, expr: &str) -> bool {
    if expr.is_empty() {
        return true;
    }

    match parse(expr) {
        Predicate::Unparsed => record
            .render_json()
            .to_lowercase()
            .contains(&expr.to_lowercase()),
        Predicate::Comparison { field, op, literal } => match record.get(&field) {
            None => false,
            Some(value) => compare(op, &value.scalar_string(), &literal),
        },
    }
}

/// Compare two coerced strings under an operator.
///
/// If both sides parse as f64 the comparison is numeric; `=` is exact
/// double equality, no epsilon. Otherwise both sides compare
/// lexicographically with the same operator semantics.
pub fn compare(op: CompareOp, a: &str, b: &str) -> bool {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => compare_ord(x, y, op),
        _ => compare_ord(a, b, op),
    }
}

fn compare_ord<T: PartialOrd>(a: T, b: T, op: CompareOp) -> bool {
    match op {
        CompareOp::Eq => a == b,
        CompareOp::Ne => a != b,
        CompareOp::Lt => a < b,
        CompareOp::Le => a <= b,
        CompareOp::Gt => a > b,
        CompareOp::Ge => a >= b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> Value {
        Value::Object(vec![
            ("id".to_string(), Value::Int(1)),
            ("name".to_string(), Value::from("Alice")),
            ("age".to_string(), Value::Int(30)),
            ("score".to_string(), Value::Float(95.5)),
            ("active".to_string(), Value::Bool(true)),
            ("nickname".to_string(), Value::Null),
            ("tags".to_string(), Value::Array(vec![Value::from("a"), Value::from("b")])),
        ])
    }

    #[test]
    fn test_parse_comparisons() {
        assert_eq!(
            parse("age >= 30"),
            Predicate::Comparison {
                field: "age".to_string(),
                op: CompareOp::Ge,
                literal: "30".to_string(),
            }
        );
        assert_eq!(
            parse("name = Alice"),
            Predicate::Comparison {
                field: "name".to_string(),
                op: CompareOp::Eq,
                literal: "Alice".to_string(),
            }
        );
        assert_eq!(
            parse("score<9.5"),
            Predicate::Comparison {
                field: "score".to_string(),
                op: CompareOp::Lt,
                literal: "9.5".to_string(),
            }
        );
        assert_eq!(
            parse("  status != done  "),
            Predicate::Comparison {
                field: "status".to_string(),
                op: CompareOp::Ne,
                literal: "done".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_two_char_operators_win() {
        // ">=" must not split as ">" / "= 30"
        match parse("age >= 30") {
            Predicate::Comparison { op, literal, .. } => {
                assert_eq!(op, CompareOp::Ge);
                assert_eq!(literal, "30");
            }
            other => panic!("expected comparison, got {:?}", other),
        }
        match parse("age <= 30") {
            Predicate::Comparison { op, .. } => assert_eq!(op, CompareOp::Le),
            other => panic!("expected comparison, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unparsed() {
        assert_eq!(parse("no-operator-here"), Predicate::Unparsed);
        assert_eq!(parse(""), Predicate::Unparsed);
        assert_eq!(parse("   "), Predicate::Unparsed);
    }

    #[test]
    fn test_compare_numeric() {
        assert!(compare(CompareOp::Eq, "30", "30.0"));
        assert!(compare(CompareOp::Gt, "10", "9.5"));
        assert!(compare(CompareOp::Le, "2", "10"));
        assert!(!compare(CompareOp::Ne, "1.5", "1.5"));
    }

    #[test]
    fn test_compare_lexicographic_fallback() {
        assert!(compare(CompareOp::Lt, "Alice", "Bob"));
        assert!(compare(CompareOp::Eq, "abc", "abc"));
        // One numeric side is not enough for the numeric path
        assert!(compare(CompareOp::Lt, "10", "9a"));
    }

    #[test]
    fn test_matches_empty_filter() {
        let record = make_record();
        assert!(matches(&record, ""));
        assert!(matches(&Value::Int(1), ""));
    }

    #[test]
    fn test_matches_structured() {
        let record = make_record();

        assert!(matches(&record, "age >= 30"));
        assert!(!matches(&record, "age > 30"));
        assert!(matches(&record, "name = Alice"));
        assert!(matches(&record, "score > 90"));
        assert!(matches(&record, "active = true"));
        assert!(matches(&record, "nickname = null"));
    }

    #[test]
    fn test_matches_missing_field_fails_closed() {
        let record = make_record();
        assert!(!matches(&record, "missing = anything"));
        assert!(!matches(&record, "missing != anything"));
    }

    #[test]
    fn test_matches_non_object_record_fails_closed() {
        assert!(!matches(&Value::Int(5), "id = 5"));
        assert!(!matches(&Value::Array(vec![]), "id = 5"));
    }

    #[test]
    fn test_matches_substring_fallback() {
        let record = make_record();

        assert!(matches(&record, "alice"));
        assert!(matches(&record, "ALICE"));
        assert!(matches(&record, "95.5"));
        assert!(!matches(&record, "zzz-not-there"));
    }

    #[test]
    fn test_matches_composite_field_compares_rendering() {
        let record = make_record();
        assert!(matches(&record, r#"tags = ["a","b"]"#));
    }
}
