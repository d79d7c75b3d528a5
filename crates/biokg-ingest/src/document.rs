//! Parsed-publication document model.

use serde::Deserialize;

/// One per-publication JSON file as written by the upstream parser.
///
/// All fields are optional; a field that is present with the wrong type
/// fails deserialization, which marks the whole file malformed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParsedDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub article_title: Option<String>,
    #[serde(default)]
    pub paper_title: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub fulltext: Option<String>,
    #[serde(default)]
    pub sections: Option<Vec<Section>>,
}

/// A `sections` array entry: either a plain string or an object carrying
/// its text under `text` or `content`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Section {
    Text(String),
    Block {
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        content: Option<String>,
    },
}

impl Section {
    fn text(&self) -> Option<&str> {
        match self {
            Section::Text(s) => Some(s),
            Section::Block { text, content } => text.as_deref().or(content.as_deref()),
        }
    }
}

/// An immutable document ready for extraction: a display label and the
/// concatenated, length-capped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub label: String,
    pub text: String,
}

impl ParsedDocument {
    /// Convert into a `Document`, falling back to `"Article <index>"` when
    /// no usable title field exists. `max_text_chars` bounds the
    /// concatenated text (character count, never splitting a codepoint).
    pub fn into_document(self, index: usize, max_text_chars: usize) -> Document {
        let label = [&self.title, &self.article_title, &self.paper_title]
            .into_iter()
            .find_map(|t| t.as_deref().filter(|t| !t.trim().is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Article {index}"));

        let mut parts: Vec<&str> = Vec::new();
        for field in [
            &self.abstract_text,
            &self.summary,
            &self.content,
            &self.fulltext,
        ] {
            if let Some(text) = field.as_deref() {
                parts.push(text);
            }
        }
        if let Some(sections) = &self.sections {
            for section in sections {
                if let Some(text) = section.text() {
                    parts.push(text);
                }
            }
        }

        Document {
            label,
            text: truncate_chars(parts.join("\n\n"), max_text_chars),
        }
    }
}

/// Truncate to at most `max` characters at a char boundary.
fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ParsedDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_title_fallback_order() {
        let doc = parse(r#"{"paper_title": "Paper", "article_title": "Article"}"#);
        assert_eq!(doc.into_document(1, 1000).label, "Article");

        let doc = parse(r#"{"title": "  ", "paper_title": "Paper"}"#);
        assert_eq!(doc.into_document(1, 1000).label, "Paper");
    }

    #[test]
    fn test_positional_fallback_label() {
        let doc = parse(r#"{"abstract": "some text"}"#);
        assert_eq!(doc.into_document(7, 1000).label, "Article 7");
    }

    #[test]
    fn test_text_concatenation_with_sections() {
        let doc = parse(
            r#"{
                "abstract": "A",
                "fulltext": "B",
                "sections": ["C", {"text": "D"}, {"content": "E"}, {"other": 1}]
            }"#,
        );
        assert_eq!(doc.into_document(1, 1000).text, "A\n\nB\n\nC\n\nD\n\nE");
    }

    #[test]
    fn test_text_truncation_is_char_safe() {
        let doc = ParsedDocument {
            abstract_text: Some("é".repeat(50)),
            ..Default::default()
        };
        let text = doc.into_document(1, 10).text;
        assert_eq!(text.chars().count(), 10);
    }

    #[test]
    fn test_non_string_text_field_is_malformed() {
        let result = serde_json::from_str::<ParsedDocument>(r#"{"abstract": 42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let doc = parse(r#"{"title": "T", "keywords": ["a", "b"], "year": 2021}"#);
        assert_eq!(doc.into_document(1, 1000).label, "T");
    }
}
