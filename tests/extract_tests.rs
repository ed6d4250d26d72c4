use exa_summary::extract::extract_summary;
use serde_json::{Value, json};

#[test]
fn test_top_level_summary_wins() {
    let value = json!({ "summary": "likes ramen and hiking" });
    assert_eq!(extract_summary(&value), "likes ramen and hiking");

    // A top-level summary takes precedence over everything else present
    let value = json!({
        "summary": "top",
        "results": [{ "summary": "nested" }],
        "documents": [{ "summary": "doc" }]
    });
    assert_eq!(extract_summary(&value), "top");
}

#[test]
fn test_results_scan_skips_non_matching_entries() {
    let value = json!({ "results": [{ "other": 1 }, { "summary": "a" }] });
    assert_eq!(extract_summary(&value), "a");
}

#[test]
fn test_results_nested_content_summary() {
    let value = json!({ "results": [{ "content": { "summary": "b" } }] });
    assert_eq!(extract_summary(&value), "b");
}

#[test]
fn test_result_entry_prefers_direct_summary_over_content() {
    let value = json!({
        "results": [{ "summary": "direct", "content": { "summary": "nested" } }]
    });
    assert_eq!(extract_summary(&value), "direct");
}

#[test]
fn test_documents_scan() {
    let value = json!({ "documents": [{ "x": 1 }, { "summary": "c" }] });
    assert_eq!(extract_summary(&value), "c");
}

#[test]
fn test_no_match_returns_empty() {
    assert_eq!(extract_summary(&json!({})), "");
    assert_eq!(extract_summary(&json!({ "results": [] })), "");
    assert_eq!(extract_summary(&Value::Null), "");
    assert_eq!(extract_summary(&json!("just a string")), "");
    assert_eq!(extract_summary(&json!(42)), "");
    assert_eq!(extract_summary(&json!([1, 2, 3])), "");
}

#[test]
fn test_wrong_typed_fields_are_skipped() {
    // A non-string top-level summary is not a match
    assert_eq!(extract_summary(&json!({ "summary": 7 })), "");

    // Scanning continues past wrong-typed and non-object entries
    let value = json!({
        "results": [
            { "summary": 1 },
            "not an object",
            null,
            { "content": "not an object either" },
            { "content": { "summary": "ok" } }
        ]
    });
    assert_eq!(extract_summary(&value), "ok");

    // A wrong-typed `results` falls through to `documents`
    let value = json!({ "results": "nope", "documents": [{ "summary": "c" }] });
    assert_eq!(extract_summary(&value), "c");
}

#[test]
fn test_deeply_malformed_values_never_panic() {
    let values = [
        json!({ "results": [{ "summary": { "summary": "buried" } }] }),
        json!({ "results": { "summary": "not a list" } }),
        json!({ "documents": [null, 3, [], { "summary": false }] }),
        json!({ "summary": null, "results": null, "documents": null }),
        json!([{ "summary": "inside an array, not an object" }]),
    ];

    for value in &values {
        assert_eq!(extract_summary(value), "");
    }
}
