use serde_json::Value;

/// Walks a dotted path (`"author.name"`, `"tags.0"`) through objects and
/// arrays.
pub fn get_nested_property<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, key| match current {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|idx| items.get(idx)),
        _ => None,
    })
}

/// Case-insensitive substring search over the given fields of each record.
/// A blank query returns every record. Array fields match if any string
/// element matches; non-string values never match.
pub fn perform_search<'a>(query: &str, items: &'a [Value], fields: &[&str]) -> Vec<&'a Value> {
    if query.trim().is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            fields.iter().any(|field| {
                get_nested_property(item, field).is_some_and(|value| value_matches(value, &needle))
            })
        })
        .collect()
}

fn value_matches(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(text) => text.to_lowercase().contains(needle),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .any(|text| text.to_lowercase().contains(needle)),
        _ => false,
    }
}
