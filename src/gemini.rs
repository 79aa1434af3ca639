//! Gateway to the Gemini generation API.
//!
//! One request per quiz submission: the answers and a fixed coaching prompt
//! go out, a single JSON object conforming to the report schema comes back.
//! No retries, no caching: the model is non-deterministic and identical
//! answers may legitimately produce different plans.

use serde_json::{json, Value};
use thiserror::Error;

use crate::models::Answers;
use crate::report::{self, ReportData};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Everything that can go wrong between submitting answers and holding a
/// validated report. Callers collapse all variants into one user-facing
/// failure; the distinctions exist for logs and tests.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("request to the generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation service returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response contained no candidate text")]
    Empty,

    #[error("response was not a valid JSON report: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("response was missing required section `{0}`")]
    Incomplete(&'static str),
}

/// Benchmark reference text embedded in the prompt. Qualitative grounding
/// only; the model compares the user against these in `howYouCompare`.
const LEADERSHIP_BENCHMARKS: &str = r#"{
  "EmotionalIntelligence": "Top-quartile leaders demonstrate high emotional self-awareness, allowing them to regulate responses in over 90% of high-stress situations.",
  "StrategicThinking": "Effective leaders dedicate 5-10 hours per week (12-25% of their time) to strategic thinking and planning, not just operational tasks.",
  "Communication": "Highly influential leaders maintain a feedback ratio of approximately 4:1 (positive/reinforcing to constructive/redirecting) to foster psychological safety and growth.",
  "TeamDevelopment": "Leaders in high-performing teams spend up to 20% of their time coaching and developing their direct reports.",
  "Wellbeing": "Leaders who model and prioritize well-being report 30% higher team engagement and have a 40% lower burnout rate among their staff."
}"#;

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            model,
        }
    }

    /// Point the client at a different endpoint. Tests use this to swap in
    /// a local server returning canned responses.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Generate a clarity plan from a full set of answers. Single attempt;
    /// the caller is responsible for only submitting complete answer sets.
    pub async fn generate_report(&self, answers: &Answers) -> Result<ReportData, GenerateError> {
        let prompt = build_prompt(answers);

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            },
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        tracing::info!(model = %self.model, "requesting clarity plan generation");

        let resp = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::error!("generation API error: {status} - {body}");
            return Err(GenerateError::Api { status, body });
        }

        let envelope: Value = resp.json().await?;
        let text = candidate_text(&envelope).ok_or(GenerateError::Empty)?;

        let data = report::ingest(text.trim())?;
        tracing::info!(
            focus_areas = data.focus_areas.len(),
            priorities = data.top3_priorities.len(),
            tasks = data.daily_tasks.len(),
            "clarity plan generated"
        );
        Ok(data)
    }
}

/// Pull the generated text out of the response envelope: all text parts of
/// the first candidate, concatenated.
fn candidate_text(envelope: &Value) -> Option<String> {
    let parts = envelope
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn format_answers(answers: &Answers) -> String {
    let mut formatted = String::from(
        "Here are the user's answers (on a scale of 1-5, where 1 is Strongly Disagree and 5 is Strongly Agree):\n",
    );
    for (question_id, rating) in answers {
        formatted.push_str(&format!("{question_id}: {rating}\n"));
    }
    formatted
}

fn build_prompt(answers: &Answers) -> String {
    format!(
        r#"
You are "Lizamari", an expert leadership coach who is warm, empowering, insightful, and completely non-judgmental. You combine values-driven insights with a possibility-focused approach to help leaders grow.

Your task is to analyze a user's answers from the 'Leadership Clarity Quiz' and generate a comprehensive, actionable, and personalized "Leadership Clarity Plan".

You MUST return the output as a single, valid JSON object that strictly adheres to the response schema. Do not include any markdown formatting like ```json around the object.

**USER'S QUIZ ANSWERS (Scale 1-5):**
{answers}

**LEADERSHIP BENCHMARKS (for your context):**
{benchmarks}

**OUTPUT REQUIREMENTS:**
- `focusAreas` must contain exactly these six areas: 'Self-Awareness & Presence', 'Emotional Regulation', 'Strategic Thinking', 'Communication & Influence', 'Team Empowerment', "Leader's Well-being".
- Each area's `status` must match its score: 'Strong' above 80, 'Developing' from 60 to 80, 'Focus Area' below 60.
- `top3Priorities` carries priority numbers 1 through 3, each with 2-4 concrete month-1 tasks and the expected positive outcome.
- `detailedBreakdown` covers each focus area with intro, 2-3 bullets of what's going well, 2-3 bullets of where to improve, a comparison against the benchmarks provided, and 2-3 quick wins.
- `sixMonthPlan` has months 1 through 6 in order, each with a theme, 3-5 key tasks, and a KPI.
- `dailyTasks` has 5-7 initial tasks, a mix of Daily, Weekly, and Monthly cadences.

**ANALYSIS INSTRUCTIONS:**
1.  **Calculate Scores:** Analyze answers to determine scores for the 6 focus areas and an overall score. Be realistic. Low scores on self-regulation questions should result in a low score for 'Emotional Regulation'.
2.  **Be a Coach:** Use an encouraging, professional, and highly actionable tone. Empower the user.
3.  **Prioritize:** The top 3 priorities should be the most impactful changes the user can make.
4.  **Actionable Advice:** All tasks must be specific and practical.
5.  **Strict JSON:** The final output must be only the JSON object, starting with `{{` and ending with `}}`.
"#,
        answers = format_answers(answers),
        benchmarks = LEADERSHIP_BENCHMARKS,
    )
}

/// The JSON schema enforced on the generation call. Mirrors the types in
/// [`crate::report`], minus the local-only `completed` fields.
fn response_schema() -> Value {
    let status_enum = json!(["Strong", "Developing", "Focus Area"]);
    let area_enum = json!([
        "Self-Awareness & Presence",
        "Emotional Regulation",
        "Strategic Thinking",
        "Communication & Influence",
        "Team Empowerment",
        "Leader's Well-being",
    ]);
    let string_array = json!({ "type": "ARRAY", "items": { "type": "STRING" } });

    json!({
        "type": "OBJECT",
        "properties": {
            "executiveSummary": {
                "type": "OBJECT",
                "properties": {
                    "overallScore": { "type": "NUMBER" },
                    "oneSentenceAssessment": { "type": "STRING" },
                    "primaryStrength": { "type": "STRING" },
                    "keyInsight": { "type": "STRING" },
                    "positiveReinforcement": { "type": "STRING" },
                },
                "required": [
                    "overallScore",
                    "oneSentenceAssessment",
                    "primaryStrength",
                    "keyInsight",
                    "positiveReinforcement",
                ],
            },
            "focusAreas": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "area": { "type": "STRING", "enum": area_enum },
                        "status": { "type": "STRING", "enum": status_enum },
                        "score": { "type": "NUMBER" },
                        "summary": { "type": "STRING" },
                    },
                    "required": ["area", "status", "score", "summary"],
                },
            },
            "top3Priorities": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "priorityNumber": { "type": "NUMBER" },
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "month1Tasks": string_array,
                        "expectedResult": { "type": "STRING" },
                    },
                    "required": [
                        "priorityNumber",
                        "title",
                        "description",
                        "month1Tasks",
                        "expectedResult",
                    ],
                },
            },
            "detailedBreakdown": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "area": { "type": "STRING", "enum": area_enum },
                        "score": { "type": "NUMBER" },
                        "status": { "type": "STRING", "enum": status_enum },
                        "intro": { "type": "STRING" },
                        "whatsGoingWell": string_array,
                        "whereToImprove": string_array,
                        "howYouCompare": { "type": "STRING" },
                        "quickWins": string_array,
                    },
                    "required": [
                        "area",
                        "score",
                        "status",
                        "intro",
                        "whatsGoingWell",
                        "whereToImprove",
                        "howYouCompare",
                        "quickWins",
                    ],
                },
            },
            "sixMonthPlan": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "month": { "type": "NUMBER" },
                        "theme": { "type": "STRING" },
                        "tasks": string_array,
                        "kpi": { "type": "STRING" },
                    },
                    "required": ["month", "theme", "tasks", "kpi"],
                },
            },
            "dailyTasks": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "category": {
                            "type": "STRING",
                            "enum": ["Awareness", "Action", "Reflection", "Regulation", "Connection"],
                        },
                        "cadence": { "type": "STRING", "enum": ["Daily", "Weekly", "Monthly"] },
                    },
                    "required": ["title", "description", "category", "cadence"],
                },
            },
        },
        "required": [
            "executiveSummary",
            "focusAreas",
            "top3Priorities",
            "detailedBreakdown",
            "sixMonthPlan",
            "dailyTasks",
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_serialize_one_per_line_in_map_order() {
        let mut answers = Answers::new();
        answers.insert("q2".to_string(), 4);
        answers.insert("q1".to_string(), 3);

        let formatted = format_answers(&answers);
        let lines: Vec<&str> = formatted.lines().skip(1).collect();
        assert_eq!(lines, vec!["q1: 3", "q2: 4"]);
    }

    #[test]
    fn prompt_names_all_six_areas() {
        let prompt = build_prompt(&Answers::new());
        for label in crate::report::FocusAreaKind::ALL {
            assert!(prompt.contains(label.label()), "missing {}", label.label());
        }
    }

    #[test]
    fn schema_excludes_local_completed_fields() {
        let schema = response_schema().to_string();
        assert!(!schema.contains("completed"));
    }
}
