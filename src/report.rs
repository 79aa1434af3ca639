//! The structured "Leadership Clarity Plan" produced by the model, and the
//! ingestion step that turns an untrusted raw response into trusted data.
//!
//! Field names are camelCase on the wire; the types here mirror the JSON
//! schema sent with the generation request. The `completed` flags on
//! priorities and tasks are local to this application; they are never
//! requested from or supplied by the model, and always start out `false`.

use serde::{Deserialize, Serialize};

use crate::gemini::GenerateError;

/// The six fixed competency categories. The model must pick from exactly
/// these labels; anything else fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusAreaKind {
    #[serde(rename = "Self-Awareness & Presence")]
    SelfAwareness,
    #[serde(rename = "Emotional Regulation")]
    EmotionalRegulation,
    #[serde(rename = "Strategic Thinking")]
    StrategicThinking,
    #[serde(rename = "Communication & Influence")]
    Communication,
    #[serde(rename = "Team Empowerment")]
    TeamEmpowerment,
    #[serde(rename = "Leader's Well-being")]
    Wellbeing,
}

impl FocusAreaKind {
    pub const ALL: [FocusAreaKind; 6] = [
        FocusAreaKind::SelfAwareness,
        FocusAreaKind::EmotionalRegulation,
        FocusAreaKind::StrategicThinking,
        FocusAreaKind::Communication,
        FocusAreaKind::TeamEmpowerment,
        FocusAreaKind::Wellbeing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FocusAreaKind::SelfAwareness => "Self-Awareness & Presence",
            FocusAreaKind::EmotionalRegulation => "Emotional Regulation",
            FocusAreaKind::StrategicThinking => "Strategic Thinking",
            FocusAreaKind::Communication => "Communication & Influence",
            FocusAreaKind::TeamEmpowerment => "Team Empowerment",
            FocusAreaKind::Wellbeing => "Leader's Well-being",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaStatus {
    Strong,
    Developing,
    #[serde(rename = "Focus Area")]
    FocusArea,
}

impl AreaStatus {
    /// The status a given score implies: >80 Strong, 60-80 Developing,
    /// <60 Focus Area.
    pub fn for_score(score: u8) -> AreaStatus {
        if score > 80 {
            AreaStatus::Strong
        } else if score >= 60 {
            AreaStatus::Developing
        } else {
            AreaStatus::FocusArea
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AreaStatus::Strong => "Strong",
            AreaStatus::Developing => "Developing",
            AreaStatus::FocusArea => "Focus Area",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCategory {
    Awareness,
    Action,
    Reflection,
    Regulation,
    Connection,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 5] = [
        TaskCategory::Awareness,
        TaskCategory::Action,
        TaskCategory::Reflection,
        TaskCategory::Regulation,
        TaskCategory::Connection,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TaskCategory::Awareness => "Awareness",
            TaskCategory::Action => "Action",
            TaskCategory::Reflection => "Reflection",
            TaskCategory::Regulation => "Regulation",
            TaskCategory::Connection => "Connection",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TaskCategory::Awareness => "\u{1F9E0}",
            TaskCategory::Action => "\u{1F4AA}",
            TaskCategory::Reflection => "\u{270D}\u{FE0F}",
            TaskCategory::Regulation => "\u{1F9D8}",
            TaskCategory::Connection => "\u{1F91D}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
}

impl Cadence {
    pub const ALL: [Cadence; 3] = [Cadence::Daily, Cadence::Weekly, Cadence::Monthly];

    pub fn label(self) -> &'static str {
        match self {
            Cadence::Daily => "Daily",
            Cadence::Weekly => "Weekly",
            Cadence::Monthly => "Monthly",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    pub overall_score: u8,
    pub one_sentence_assessment: String,
    pub primary_strength: String,
    pub key_insight: String,
    pub positive_reinforcement: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusArea {
    pub area: FocusAreaKind,
    pub status: AreaStatus,
    pub score: u8,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPriority {
    pub priority_number: u32,
    pub title: String,
    pub description: String,
    pub month1_tasks: Vec<String>,
    pub expected_result: String,
    /// Local-only; never requested from the model.
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedBreakdown {
    pub area: FocusAreaKind,
    pub score: u8,
    pub status: AreaStatus,
    pub intro: String,
    #[serde(default)]
    pub whats_going_well: Vec<String>,
    #[serde(default)]
    pub where_to_improve: Vec<String>,
    pub how_you_compare: String,
    #[serde(default)]
    pub quick_wins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SixMonthPhase {
    pub month: u8,
    pub theme: String,
    #[serde(default)]
    pub tasks: Vec<String>,
    pub kpi: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub cadence: Cadence,
    /// Local-only; never requested from the model.
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub executive_summary: ExecutiveSummary,
    pub focus_areas: Vec<FocusArea>,
    pub top3_priorities: Vec<TopPriority>,
    pub detailed_breakdown: Vec<DetailedBreakdown>,
    pub six_month_plan: Vec<SixMonthPhase>,
    pub daily_tasks: Vec<Task>,
}

// ─── Raw wire types ───
//
// What the model actually returns. Priorities and tasks arrive without the
// local `completed` field; the narrative sections may be missing entirely
// and default to empty (one consistent policy, rather than carrying
// absent-vs-empty ambiguity into the rest of the app).

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPriority {
    priority_number: u32,
    title: String,
    description: String,
    #[serde(default)]
    month1_tasks: Vec<String>,
    expected_result: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTask {
    title: String,
    description: String,
    category: TaskCategory,
    cadence: Cadence,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReport {
    executive_summary: Option<ExecutiveSummary>,
    focus_areas: Option<Vec<FocusArea>>,
    top3_priorities: Option<Vec<RawPriority>>,
    #[serde(default)]
    detailed_breakdown: Vec<DetailedBreakdown>,
    #[serde(default)]
    six_month_plan: Vec<SixMonthPhase>,
    #[serde(default)]
    daily_tasks: Vec<RawTask>,
}

/// Parse and validate a raw model response into a [`ReportData`].
///
/// The response is untrusted input: it must parse as a single JSON object,
/// carry the three core sections, and keep each status consistent with its
/// score. Inconsistent statuses are flagged and recomputed from the score
/// (the score is authoritative). Every priority and task comes out with
/// `completed = false`.
pub fn ingest(raw: &str) -> Result<ReportData, GenerateError> {
    let parsed: RawReport = serde_json::from_str(raw)?;

    let executive_summary = parsed
        .executive_summary
        .ok_or(GenerateError::Incomplete("executiveSummary"))?;
    let focus_areas = parsed
        .focus_areas
        .ok_or(GenerateError::Incomplete("focusAreas"))?;
    let priorities = parsed
        .top3_priorities
        .ok_or(GenerateError::Incomplete("top3Priorities"))?;

    let focus_areas = focus_areas
        .into_iter()
        .map(|mut a| {
            let expected = AreaStatus::for_score(a.score);
            if a.status != expected {
                tracing::warn!(
                    area = a.area.label(),
                    score = a.score,
                    got = a.status.label(),
                    "focus area status inconsistent with score, normalizing"
                );
                a.status = expected;
            }
            a
        })
        .collect();

    let detailed_breakdown = parsed
        .detailed_breakdown
        .into_iter()
        .map(|mut d| {
            let expected = AreaStatus::for_score(d.score);
            if d.status != expected {
                tracing::warn!(
                    area = d.area.label(),
                    score = d.score,
                    got = d.status.label(),
                    "breakdown status inconsistent with score, normalizing"
                );
                d.status = expected;
            }
            d
        })
        .collect();

    Ok(ReportData {
        executive_summary,
        focus_areas,
        top3_priorities: priorities
            .into_iter()
            .map(|p| TopPriority {
                priority_number: p.priority_number,
                title: p.title,
                description: p.description,
                month1_tasks: p.month1_tasks,
                expected_result: p.expected_result,
                completed: false,
            })
            .collect(),
        detailed_breakdown,
        six_month_plan: parsed.six_month_plan,
        daily_tasks: parsed
            .daily_tasks
            .into_iter()
            .map(|t| Task {
                title: t.title,
                description: t.description,
                category: t.category,
                cadence: t.cadence,
                completed: false,
            })
            .collect(),
    })
}

/// Plain-text projection of a report, for copy/export. Read-only: takes the
/// data by reference and never touches session state.
pub fn to_plain_text(data: &ReportData) -> String {
    let mut out = String::from("Your Leadership Clarity Plan\n\n");

    out.push_str("--- PLAN AT A GLANCE ---\n");
    out.push_str(&format!(
        "Overall Score: {}/100\n",
        data.executive_summary.overall_score
    ));
    out.push_str(&format!(
        "Summary: {}\n",
        data.executive_summary.one_sentence_assessment
    ));
    out.push_str(&format!(
        "Primary Strength: {}\n",
        data.executive_summary.positive_reinforcement
    ));
    out.push_str(&format!(
        "Key Insight: {}\n\n",
        data.executive_summary.key_insight
    ));

    out.push_str("--- WHERE TO FOCUS NOW ---\n");
    for area in &data.focus_areas {
        out.push_str(&format!(
            "{}: {}/100 ({})\n",
            area.area.label(),
            area.score,
            area.status.label()
        ));
    }
    out.push('\n');

    out.push_str("--- YOUR TOP 3 GOALS ---\n");
    for goal in &data.top3_priorities {
        out.push_str(&format!("Goal #{}: {}\n", goal.priority_number, goal.title));
        out.push_str(&format!("{}\n", goal.description));
        out.push_str("Month 1 Tasks:\n");
        for task in &goal.month1_tasks {
            out.push_str(&format!("- {task}\n"));
        }
        out.push_str(&format!("Expected Result: {}\n\n", goal.expected_result));
    }

    out.push_str("--- 6-MONTH ROADMAP ---\n");
    for phase in &data.six_month_plan {
        out.push_str(&format!("Month {}: {}\n", phase.month, phase.theme));
        out.push_str("Tasks:\n");
        for task in &phase.tasks {
            out.push_str(&format!("- {task}\n"));
        }
        out.push_str(&format!("KPI: {}\n\n", phase.kpi));
    }

    out
}
