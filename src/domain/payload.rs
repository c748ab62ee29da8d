//! Form payload sent to the `posts/new` endpoint.

use serde::{Serialize, Serializer, ser::SerializeMap};
use url::form_urlencoded;

use crate::domain::post::PostDraft;

/// Field names accepted by the `posts/new` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadField {
    Title,
    Content,
    Status,
    Excerpt,
    Slug,
    Categories,
    Tags,
}

impl PayloadField {
    pub fn as_str(self) -> &'static str {
        match self {
            PayloadField::Title => "title",
            PayloadField::Content => "content",
            PayloadField::Status => "status",
            PayloadField::Excerpt => "excerpt",
            PayloadField::Slug => "slug",
            PayloadField::Categories => "categories",
            PayloadField::Tags => "tags",
        }
    }
}

/// Ordered field/value pairs. Title, content and status are always present;
/// optional fields appear only when their value is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    fields: Vec<(PayloadField, String)>,
}

impl Payload {
    pub fn get(&self, field: PayloadField) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, field: PayloadField) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    fn push_if_present(&mut self, field: PayloadField, value: String) {
        if !value.is_empty() {
            self.fields.push((field, value));
        }
    }
}

impl From<&PostDraft> for Payload {
    fn from(draft: &PostDraft) -> Self {
        let mut payload = Payload {
            fields: vec![
                (PayloadField::Title, draft.title.clone()),
                (PayloadField::Content, draft.content.clone()),
                (PayloadField::Status, draft.status.as_str().to_string()),
            ],
        };
        payload.push_if_present(PayloadField::Excerpt, draft.excerpt.clone());
        payload.push_if_present(PayloadField::Slug, draft.slug.clone());
        payload.push_if_present(PayloadField::Categories, normalize_csv(&draft.categories));
        payload.push_if_present(PayloadField::Tags, normalize_csv(&draft.tags));
        payload
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Trim each comma-separated entry and drop the empty ones.
pub fn normalize_csv(value: &str) -> String {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
