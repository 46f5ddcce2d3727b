//! Query evaluation over JSON documents.

use std::cmp::Ordering;

use serde_json::Value;

use storeit_core::types::Query;

/// Default page size applied when no limit query is given.
pub(crate) const DEFAULT_LIMIT: u64 = 25;

/// Whether `document` satisfies every filter in `queries`.
pub(crate) fn matches_all(document: &Value, queries: &[Query]) -> bool {
    queries
        .iter()
        .filter(|q| q.is_filter())
        .all(|q| matches(document, q))
}

fn matches(document: &Value, query: &Query) -> bool {
    match query {
        Query::Equal { attribute, values } => document
            .get(attribute)
            .is_some_and(|field| values.iter().any(|v| v == field)),
        Query::Contains { attribute, values } => match document.get(attribute) {
            Some(Value::Array(items)) => values.iter().any(|v| items.contains(v)),
            Some(Value::String(text)) => values
                .iter()
                .filter_map(Value::as_str)
                .any(|needle| text.contains(needle)),
            _ => false,
        },
        Query::Or(queries) => queries.iter().any(|q| matches(document, q)),
        Query::OrderAsc(_) | Query::OrderDesc(_) | Query::Limit(_) => true,
    }
}

/// Sort by the ordering queries (first one wins) and apply the limit.
pub(crate) fn order_and_limit(documents: &mut Vec<Value>, queries: &[Query]) {
    let orderings: Vec<(&str, bool)> = queries
        .iter()
        .filter_map(|q| match q {
            Query::OrderAsc(attr) => Some((attr.as_str(), false)),
            Query::OrderDesc(attr) => Some((attr.as_str(), true)),
            _ => None,
        })
        .collect();

    if !orderings.is_empty() {
        documents.sort_by(|a, b| {
            orderings
                .iter()
                .map(|(attr, descending)| {
                    let ord = compare(a.get(*attr), b.get(*attr));
                    if *descending { ord.reverse() } else { ord }
                })
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
    }

    let limit = queries
        .iter()
        .rev()
        .find_map(|q| match q {
            Query::Limit(n) => Some(*n),
            _ => None,
        })
        .unwrap_or(DEFAULT_LIMIT);
    documents.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
}

/// Missing values sort after present ones.
fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.to_lowercase().cmp(&y.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn docs() -> Vec<Value> {
        vec![
            json!({ "name": "b.txt", "size": 10, "owner": "u1", "users": [] }),
            json!({ "name": "A.png", "size": 30, "owner": "u2", "users": ["ann@x.com"] }),
            json!({ "name": "c.mp3", "size": 20, "owner": "u2", "users": [] }),
        ]
    }

    #[test]
    fn test_equal_filter() {
        let q = [Query::equal("owner", ["u2"])];
        let hits: Vec<_> = docs().into_iter().filter(|d| matches_all(d, &q)).collect();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_or_with_contains() {
        let q = [Query::or([
            Query::equal("owner", ["u1"]),
            Query::contains("users", ["ann@x.com"]),
        ])];
        let hits: Vec<_> = docs().into_iter().filter(|d| matches_all(d, &q)).collect();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_missing_attribute_does_not_match() {
        assert!(!matches_all(&json!({}), &[Query::equal("email", ["x"])]));
    }

    #[test]
    fn test_order_by_name_is_case_insensitive() {
        let mut d = docs();
        order_and_limit(&mut d, &[Query::OrderAsc("name".into())]);
        let names: Vec<_> = d.iter().map(|v| v["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["A.png", "b.txt", "c.mp3"]);
    }

    #[test]
    fn test_order_desc_by_size_and_limit() {
        let mut d = docs();
        order_and_limit(&mut d, &[Query::OrderDesc("size".into()), Query::Limit(2)]);
        let sizes: Vec<_> = d.iter().map(|v| v["size"].as_u64().unwrap()).collect();
        assert_eq!(sizes, [30, 20]);
    }
}
