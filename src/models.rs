use std::collections::BTreeMap;

use serde::Deserialize;

/// Question id → Likert rating (1-5). A `BTreeMap` keeps iteration order
/// stable so the serialized answer listing sent to the model is
/// deterministic for a given set of answers.
pub type Answers = BTreeMap<String, u8>;

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
}

/// An ordered group of questions. Section order defines presentation
/// and question numbering.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub title: String,
    pub questions: Vec<Question>,
}
