use serde::{Deserialize, Serialize};

use crate::modules::streams::core::ports::StoreError;
use crate::shared::core::json_number;

/// A positioned HTML fragment inside a [`Stream`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamElement {
    #[serde(serialize_with = "json_number::serialize")]
    pub x: f64,
    #[serde(serialize_with = "json_number::serialize")]
    pub y: f64,
    pub content: String,
}

/// A canvas record: dimensions plus its elements in render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub id: String,
    #[serde(serialize_with = "json_number::serialize")]
    pub width: f64,
    #[serde(serialize_with = "json_number::serialize")]
    pub height: f64,
    pub elements: Vec<StreamElement>,
}

/// Stream data before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStream {
    #[serde(serialize_with = "json_number::serialize")]
    pub width: f64,
    #[serde(serialize_with = "json_number::serialize")]
    pub height: f64,
    #[serde(default)]
    pub elements: Vec<StreamElement>,
}

impl NewStream {
    pub fn into_stream(self, id: impl Into<String>) -> Stream {
        Stream {
            id: id.into(),
            width: self.width,
            height: self.height,
            elements: self.elements,
        }
    }
}

/// Partial field match used to select the records a patch applies to.
///
/// Unset fields match anything, so the default query matches every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "json_number::option::serialize"
    )]
    pub width: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "json_number::option::serialize"
    )]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<StreamElement>>,
}

impl StreamQuery {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, stream: &Stream) -> bool {
        self.id.as_ref().is_none_or(|id| *id == stream.id)
            && self.width.is_none_or(|width| width == stream.width)
            && self.height.is_none_or(|height| height == stream.height)
            && self
                .elements
                .as_ref()
                .is_none_or(|elements| *elements == stream.elements)
    }
}

/// Fields to shallow-merge into matched records.
///
/// `id` is accepted on the wire only so that an attempt to overwrite it can be
/// rejected; [`StreamPatch::validate`] refuses any patch that carries one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "json_number::option::serialize"
    )]
    pub width: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "json_number::option::serialize"
    )]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<StreamElement>>,
}

impl StreamPatch {
    pub fn validate(&self) -> Result<(), StoreError> {
        match self.id {
            Some(_) => Err(StoreError::ImmutableField),
            None => Ok(()),
        }
    }

    pub fn apply_to(&self, stream: &mut Stream) {
        if let Some(width) = self.width {
            stream.width = width;
        }
        if let Some(height) = self.height {
            stream.height = height;
        }
        if let Some(elements) = &self.elements {
            stream.elements = elements.clone();
        }
    }
}

/// Either an id or a full record, resolved by id when deleting.
#[derive(Debug, Clone, Copy)]
pub enum StreamRef<'a> {
    Id(&'a str),
    Stream(&'a Stream),
}

impl StreamRef<'_> {
    pub fn id(&self) -> &str {
        match self {
            StreamRef::Id(id) => id,
            StreamRef::Stream(stream) => &stream.id,
        }
    }
}

impl<'a> From<&'a str> for StreamRef<'a> {
    fn from(id: &'a str) -> Self {
        StreamRef::Id(id)
    }
}

impl<'a> From<&'a String> for StreamRef<'a> {
    fn from(id: &'a String) -> Self {
        StreamRef::Id(id)
    }
}

impl<'a> From<&'a Stream> for StreamRef<'a> {
    fn from(stream: &'a Stream) -> Self {
        StreamRef::Stream(stream)
    }
}
