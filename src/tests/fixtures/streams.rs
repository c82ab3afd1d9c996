// Shared test fixture for NewStream payloads, seeded from `json/new_stream.json`.

use crate::modules::streams::core::stream::{NewStream, StreamElement};

const NEW_STREAM_JSON: &str = include_str!("json/new_stream.json");

pub struct NewStreamBuilder {
    inner: NewStream,
}

impl Default for NewStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewStreamBuilder {
    pub fn new() -> Self {
        let inner: NewStream = serde_json::from_str(NEW_STREAM_JSON).unwrap();
        Self { inner }
    }

    pub fn width(mut self, v: f64) -> Self {
        self.inner.width = v;
        self
    }

    pub fn height(mut self, v: f64) -> Self {
        self.inner.height = v;
        self
    }

    pub fn element(mut self, x: f64, y: f64, content: impl Into<String>) -> Self {
        self.inner.elements.push(StreamElement {
            x,
            y,
            content: content.into(),
        });
        self
    }

    pub fn build(self) -> NewStream {
        self.inner
    }
}

#[cfg(test)]
mod new_stream_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = NewStreamBuilder::default().build();
        assert_eq!(built.width, 640.0);
        assert_eq!(built.height, 480.0);
        assert!(built.elements.is_empty());
    }

    #[rstest]
    fn setters_override_fields_and_append_elements_in_order() {
        let built = NewStreamBuilder::new()
            .width(1.0)
            .height(2.0)
            .element(0.0, 0.0, "<h1>a</h1>")
            .element(5.0, -5.0, "<p>b</p>")
            .build();

        assert_eq!(built.width, 1.0);
        assert_eq!(built.height, 2.0);
        let contents: Vec<&str> = built.elements.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["<h1>a</h1>", "<p>b</p>"]);
        assert_eq!(built.elements[1].y, -5.0);
    }
}
