#[cfg(test)]
mod tests {
    use shared::SlideLabel;

    #[test]
    fn test_every_slide_gets_distinct_label() {
        let labels: Vec<String> = (0..8).map(SlideLabel::image).collect();

        assert_eq!(labels.first().map(String::as_str), Some("Gallery image 1"));
        assert_eq!(labels.last().map(String::as_str), Some("Gallery image 8"));

        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), labels.len());
    }

    #[test]
    fn test_custom_variables() {
        let rendered = SlideLabel::new("{{names}} - photo {{number}}")
            .with_variable("names", "Ada & Grace")
            .with_index(0)
            .render();

        assert_eq!(rendered, "Ada & Grace - photo 1");
    }

    #[test]
    fn test_position_label_last_slide() {
        assert_eq!(SlideLabel::position(7, 8), "Slide 8 of 8");
    }
}
