//! Output formatting: pretty JSON-LD and the embeddable `<script>` wrapper.

use serde_json::Value;

const SCRIPT_OPEN: &str = "<script type=\"application/ld+json\">";
const SCRIPT_CLOSE: &str = "</script>";

/// Pretty JSON: a single document renders bare, multiple as an array.
pub fn to_json(documents: &[Value]) -> String {
    match documents {
        [single] => serde_json::to_string_pretty(single).unwrap_or_default(),
        many => serde_json::to_string_pretty(many).unwrap_or_default(),
    }
}

/// One `<script type="application/ld+json">` block per document, blocks
/// separated by exactly one blank line. The delimiters are a fixed contract
/// for downstream embedding; don't restyle them.
pub fn to_script_tags(documents: &[Value]) -> String {
    documents
        .iter()
        .map(|doc| {
            format!(
                "{}\n{}\n{}",
                SCRIPT_OPEN,
                serde_json::to_string_pretty(doc).unwrap_or_default(),
                SCRIPT_CLOSE,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_document_renders_bare() {
        let out = to_json(&[json!({"@type": "WebSite"})]);
        assert!(out.starts_with('{'));
        assert!(out.contains("\"@type\": \"WebSite\""));
    }

    #[test]
    fn multiple_documents_render_as_array() {
        let out = to_json(&[json!({"a": 1}), json!({"b": 2})]);
        assert!(out.starts_with('['));
    }

    #[test]
    fn script_blocks_separated_by_one_blank_line() {
        let out = to_script_tags(&[json!({"a": 1}), json!({"b": 2})]);
        assert_eq!(out.matches(SCRIPT_OPEN).count(), 2);
        assert_eq!(out.matches("</script>\n\n<script").count(), 1);
        assert!(out.ends_with(SCRIPT_CLOSE));
    }

    #[test]
    fn field_order_is_stable() {
        let doc = json!({"z": 1, "a": 2, "m": 3});
        let out = to_json(&[doc]);
        let z = out.find("\"z\"").unwrap();
        let a = out.find("\"a\"").unwrap();
        let m = out.find("\"m\"").unwrap();
        assert!(z < a && a < m, "insertion order lost: {out}");
    }
}
