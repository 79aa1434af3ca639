//! The static question catalog. Sections and questions are embedded at
//! compile time and never change while the process runs.

use std::sync::LazyLock;

use crate::models::Section;

static SECTIONS: LazyLock<Vec<Section>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/questions.json"))
        .expect("embedded question catalog is valid JSON")
});

pub fn sections() -> &'static [Section] {
    &SECTIONS
}

pub fn total_questions() -> usize {
    SECTIONS.iter().map(|s| s.questions.len()).sum()
}

/// 1-based display number of the first question in a section.
pub fn first_question_number(section_idx: usize) -> usize {
    1 + SECTIONS
        .iter()
        .take(section_idx)
        .map(|s| s.questions.len())
        .sum::<usize>()
}

pub const RATING_LABELS: [(u8, &str); 5] = [
    (1, "Strongly Disagree"),
    (2, "Disagree"),
    (3, "Neutral"),
    (4, "Agree"),
    (5, "Strongly Agree"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_parses_and_counts() {
        assert_eq!(sections().len(), 3);
        assert_eq!(total_questions(), 16);
        assert_eq!(first_question_number(0), 1);
        assert_eq!(first_question_number(1), 5);
        assert_eq!(first_question_number(2), 11);
    }

    #[test]
    fn question_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for s in sections() {
            for q in &s.questions {
                assert!(seen.insert(q.id.as_str()), "duplicate id {}", q.id);
            }
        }
    }
}
