use pretty_assertions::assert_eq;
use qfilter::prelude::*;
use serde_json::{Value, json};

fn object(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(obj) => obj,
        _ => panic!("expected an object"),
    }
}

#[test]
fn test_full_round_trip() {
    let input = json!({
        "where": {
            "and": [
                {"name": "astra"},
                {"gender": {"in": ["man", "woman"]}},
                {"address": {"like": "_ca%"}}
            ]
        },
        "order": ["x desc", "y asc"],
        "limit": 10,
        "skip": 100
    });

    let mut filter = Filter::new();
    filter.build(&object(input)).expect("valid filter");

    assert_eq!(
        filter.to_sql(),
        " WHERE (name = 'astra' AND gender IN ('man', 'woman') AND address LIKE '_ca%') ORDER BY x desc, y asc LIMIT 10 OFFSET 100"
    );
}

#[test]
fn test_where_examples() {
    let cases = [
        (json!({"carClass": "fullsize"}), " WHERE carClass = 'fullsize'"),
        (
            json!({"date": {"gt": "2014-04-01T18:30:00.000Z"}}),
            " WHERE date > '2014-04-01T18:30:00.000Z'",
        ),
        (
            json!({"and": [{"title": "My Post"}, {"content": "Hello"}]}),
            " WHERE (title = 'My Post' AND content = 'Hello')",
        ),
    ];

    for (input, expected) in cases {
        let filter = qfilter::parse(&json!({ "where": input })).unwrap();
        assert_eq!(filter.to_sql(), expected);
    }
}

#[test]
fn test_order_examples() {
    let filter = qfilter::parse(&json!({"order": "price DESC"})).unwrap();
    assert_eq!(filter.to_sql(), " ORDER BY price DESC");

    let filter = qfilter::parse(&json!({"order": ["price DESC", 1, "id ASC"]})).unwrap();
    assert_eq!(filter.to_sql(), " ORDER BY price DESC, id ASC");

    let filter = qfilter::parse(&json!({"order": [true, false]})).unwrap();
    assert_eq!(filter.order, None);
    assert_eq!(filter.to_sql(), "");
}

#[test]
fn test_error_taxonomy() {
    let cases = [
        (json!({"where": {"and": []}}), FilterError::empty_array("and")),
        (json!({"where": {"str": []}}), FilterError::not_supported("str")),
        (json!({"where": {"and": {"a": 1}}}), FilterError::not_an_array("and")),
        (
            json!({"where": {"in": ["A"]}}),
            FilterError::ReservedKeyword("in".to_string()),
        ),
        (json!({"where": {"str": {"in": []}}}), FilterError::empty_array("str")),
        (json!({"where": {"str": {"in": "A"}}}), FilterError::not_an_array("str")),
        (
            json!({"where": {"str": {"between": [1, 2]}}}),
            FilterError::InvalidKeyword("between".to_string()),
        ),
        (json!({"where": "a = 1"}), FilterError::invalid_filter("where")),
        (json!({"order": {"a": 1}}), FilterError::invalid_filter("order")),
        (json!({"limit": "10"}), FilterError::invalid_filter("limit")),
        (json!({"skip": [1]}), FilterError::invalid_filter("skip")),
    ];

    for (input, expected) in cases {
        assert_eq!(qfilter::parse(&input), Err(expected));
    }
}

#[test]
fn test_lenient_build_keeps_valid_fields() {
    let mut filter = Filter::new();
    let err = filter
        .build(&object(json!({
            "where": {"a": {"like": 3}},
            "order": "a asc",
            "limit": 5.5
        })))
        .unwrap_err();

    assert_eq!(err, FilterError::not_supported("a"));
    assert_eq!(filter.to_sql(), " ORDER BY a asc LIMIT 5");
}

#[test]
fn test_combination_helpers() {
    let mut filter = qfilter::parse(&json!({"where": {"or": [{"a": 1}, {"b": 2}]}})).unwrap();

    let extra = parse_where(&json!({"and": [{"c": 3}, {"d": 4}]})).unwrap();
    filter.and([extra]);
    assert_eq!(filter.to_sql(), " WHERE ((a = 1 OR b = 2) AND c = 3 AND d = 4)");

    filter.or([builders::eq("e", "x")]);
    assert_eq!(
        filter.to_sql(),
        " WHERE (((a = 1 OR b = 2) AND c = 3 AND d = 4) OR e = 'x')"
    );
}

#[test]
fn test_tree_serializes_as_json() {
    let filter = qfilter::parse(&json!({"where": {"n": {"nin": [1, 2]}}, "skip": 3})).unwrap();
    let dumped = serde_json::to_value(&filter).unwrap();
    let restored: Filter = serde_json::from_value(dumped).unwrap();
    assert_eq!(restored, filter);
}
