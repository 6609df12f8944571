//! Two-level topic hierarchy parser for the nested "about" field.
//!
//! Input format, one entry per line:
//!
//! ```text
//! ParentName | url1, url2
//! - ChildName | url1, url2
//! ```
//!
//! A bullet prefix (`-`, `•`, `—`, `–`) marks a child of the most recent
//! unprefixed parent. A child appearing before any parent is dropped.

use serde::Serialize;

use super::lines::clean_lines;

const BULLETS: [char; 4] = ['-', '•', '—', '–'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub name: String,
    #[serde(rename = "sameAs")]
    pub same_as: Vec<String>,
    /// Absent from serialized output when empty, so leaf topics keep a
    /// distinct shape from parents-with-children.
    #[serde(rename = "hasPart", skip_serializing_if = "Vec::is_empty")]
    pub has_part: Vec<Topic>,
}

pub fn parse_topics(text: &str) -> Vec<Topic> {
    let mut topics: Vec<Topic> = Vec::new();

    for line in clean_lines(text) {
        let is_child = line.starts_with(BULLETS);
        let body = if is_child {
            line.trim_start_matches(BULLETS).trim_start()
        } else {
            line.as_str()
        };

        let (name, same_as) = split_name_urls(body);
        if name.is_empty() {
            continue;
        }

        let node = Topic {
            name,
            same_as,
            has_part: Vec::new(),
        };

        if is_child {
            // Orphaned child line (no parent seen yet): drop it.
            if let Some(parent) = topics.last_mut() {
                parent.has_part.push(node);
            }
        } else {
            topics.push(node);
        }
    }

    topics
}

/// `Name | url1, url2` with the URL list optional.
fn split_name_urls(body: &str) -> (String, Vec<String>) {
    match body.split_once('|') {
        Some((name, urls)) => {
            let urls = urls
                .split(',')
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(str::to_string)
                .collect();
            (name.trim().to_string(), urls)
        }
        None => (body.trim().to_string(), Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_with_children() {
        let topics = parse_topics(
            "Furniture | https://wiki/Furniture\n\
             - Bed | https://wiki/Bed\n\
             - Sofa",
        );
        assert_eq!(topics.len(), 1);
        let parent = &topics[0];
        assert_eq!(parent.name, "Furniture");
        assert_eq!(parent.same_as, vec!["https://wiki/Furniture"]);
        assert_eq!(parent.has_part.len(), 2);
        assert_eq!(parent.has_part[0].name, "Bed");
        assert_eq!(parent.has_part[0].same_as, vec!["https://wiki/Bed"]);
        assert_eq!(parent.has_part[1].name, "Sofa");
        assert!(parent.has_part[1].same_as.is_empty());
    }

    #[test]
    fn orphaned_child_dropped() {
        let topics = parse_topics("- Orphan | https://a.com\nParent");
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].name, "Parent");
        assert!(topics[0].has_part.is_empty());
    }

    #[test]
    fn leaf_serializes_without_has_part_key() {
        let topics = parse_topics("Lighting | https://wiki/Light");
        let v = serde_json::to_value(&topics[0]).unwrap();
        assert!(v.get("hasPart").is_none());
        assert_eq!(v["name"], "Lighting");
    }

    #[test]
    fn url_list_split_and_trimmed() {
        let topics = parse_topics("Rugs | https://a.com , , https://b.com");
        assert_eq!(topics[0].same_as, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn multiple_parents() {
        let topics = parse_topics("A\n- a1\nB\n- b1\n- b2");
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].has_part.len(), 1);
        assert_eq!(topics[1].has_part.len(), 2);
    }

    #[test]
    fn bullet_variants() {
        for marker in ["-", "•", "—", "–"] {
            let topics = parse_topics(&format!("P\n{} Child", marker));
            assert_eq!(topics[0].has_part.len(), 1, "marker {:?}", marker);
            assert_eq!(topics[0].has_part[0].name, "Child");
        }
    }
}
