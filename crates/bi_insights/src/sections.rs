use serde_json::{Map, Value};

use bi_core::{MarketingSection, TopicInsight};

/// Typed section value: either a parsed insight list or an opaque payload
/// passed through from the analysis service.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Topics(Vec<TopicInsight>),
    Raw(Value),
}

/// Reshape an ordered list of (title, content) entries into the array form
/// the presentation layer consumes. Total over its input; entry order is
/// preserved.
pub fn sections_from_entries(entries: Vec<(String, SectionContent)>) -> Vec<MarketingSection> {
    entries
        .into_iter()
        .map(|(title, content)| match content {
            SectionContent::Topics(topics) => {
                let content = serde_json::to_value(&topics).unwrap_or(Value::Null);
                MarketingSection { title, topics, content }
            }
            SectionContent::Raw(value) => MarketingSection {
                title,
                topics: topics_from_value(&value),
                content: value,
            },
        })
        .collect()
}

/// Reshape a raw service payload, keyed by section title, preserving the
/// map's insertion order. Array values contribute whatever elements parse
/// as insights; everything else lands in `content` untouched with an empty
/// topic list.
pub fn sections_from_value(map: &Map<String, Value>) -> Vec<MarketingSection> {
    map.iter()
        .map(|(title, value)| MarketingSection {
            title: title.clone(),
            topics: topics_from_value(value),
            content: value.clone(),
        })
        .collect()
}

fn topics_from_value(value: &Value) -> Vec<TopicInsight> {
    match value {
        Value::Array(elements) => elements
            .iter()
            .filter_map(|el| serde_json::from_value(el.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_order_is_preserved() {
        let mut map = Map::new();
        map.insert("a".to_string(), json!([]));
        map.insert("b".to_string(), json!([]));
        let sections = sections_from_value(&map);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "a");
        assert_eq!(sections[1].title, "b");
    }

    #[test]
    fn test_scalar_value_yields_empty_topics() {
        let mut map = Map::new();
        map.insert("a".to_string(), json!("not-an-array"));
        let sections = sections_from_value(&map);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "a");
        assert!(sections[0].topics.is_empty());
        assert_eq!(sections[0].content, json!("not-an-array"));
    }

    #[test]
    fn test_array_of_insights_is_parsed() {
        let mut map = Map::new();
        map.insert(
            "media".to_string(),
            json!([{"headline": "Press Coverage", "insights": ["a", "b"]}]),
        );
        let sections = sections_from_value(&map);
        assert_eq!(sections[0].topics.len(), 1);
        assert_eq!(sections[0].topics[0].headline, "Press Coverage");
    }

    #[test]
    fn test_typed_entries_keep_order_and_content() {
        let entries = vec![
            (
                "consumer".to_string(),
                SectionContent::Topics(vec![TopicInsight {
                    headline: "Target Demographics".to_string(),
                    insights: vec!["x".to_string()],
                }]),
            ),
            ("extra".to_string(), SectionContent::Raw(json!(42))),
        ];
        let sections = sections_from_entries(entries);
        assert_eq!(sections[0].title, "consumer");
        assert_eq!(sections[0].topics.len(), 1);
        assert_eq!(sections[1].title, "extra");
        assert!(sections[1].topics.is_empty());
        assert_eq!(sections[1].content, json!(42));
    }
}
