use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Accessible text for a slide, indicator dot or thumbnail.
///
/// Templates use `{{name}}` placeholders. Slide numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideLabel {
    pub template: String,
    pub variables: HashMap<String, String>,
}

impl SlideLabel {
    pub const IMAGE: &'static str = "Gallery image {{number}}";
    pub const THUMBNAIL: &'static str = "Thumbnail {{number}}";
    pub const POSITION: &'static str = "Slide {{number}} of {{total}}";

    pub fn new<S: Into<String>>(template: S) -> Self {
        Self {
            template: template.into(),
            variables: HashMap::new(),
        }
    }

    pub fn with_variable<S: Into<String>>(mut self, key: &str, value: S) -> Self {
        self.variables.insert(key.to_string(), value.into());
        self
    }

    /// Fill `{{number}}` from a 0-based index
    pub fn with_index(self, index: usize) -> Self {
        self.with_variable("number", (index + 1).to_string())
    }

    pub fn with_total(self, total: usize) -> Self {
        self.with_variable("total", total.to_string())
    }

    pub fn render(&self) -> String {
        let mut rendered = self.template.clone();

        for (key, value) in &self.variables {
            rendered = rendered.replace(&format!("{{{{{}}}}}", key), value);
        }

        rendered
    }

    pub fn image(index: usize) -> String {
        Self::new(Self::IMAGE).with_index(index).render()
    }

    pub fn thumbnail(index: usize) -> String {
        Self::new(Self::THUMBNAIL).with_index(index).render()
    }

    pub fn position(index: usize, total: usize) -> String {
        Self::new(Self::POSITION)
            .with_index(index)
            .with_total(total)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_label_creation() {
        let label = SlideLabel::new("Photo {{number}}");
        assert_eq!(label.template, "Photo {{number}}");
        assert!(label.variables.is_empty());
    }

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(SlideLabel::image(0), "Gallery image 1");
        assert_eq!(SlideLabel::thumbnail(7), "Thumbnail 8");
        assert_eq!(SlideLabel::position(2, 8), "Slide 3 of 8");
    }

    #[test]
    fn test_unknown_placeholders_left_alone() {
        let label = SlideLabel::new("{{number}} - {{caption}}").with_index(4);
        assert_eq!(label.render(), "5 - {{caption}}");
    }
}
