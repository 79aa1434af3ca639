#![allow(dead_code)]

use clarityplan::gemini::GeminiClient;
use clarityplan::session::SessionStore;
use clarityplan::AppState;
use serde_json::{json, Value};

/// A schema-conforming report the fake boundary hands back: six focus
/// areas, three priorities, six breakdowns, months 1-6 and a task mix.
pub fn canned_report() -> Value {
    let areas = [
        ("Self-Awareness & Presence", 85, "Strong"),
        ("Emotional Regulation", 62, "Developing"),
        ("Strategic Thinking", 71, "Developing"),
        ("Communication & Influence", 55, "Focus Area"),
        ("Team Empowerment", 78, "Developing"),
        ("Leader's Well-being", 43, "Focus Area"),
    ];

    let focus_areas: Vec<Value> = areas
        .iter()
        .map(|(area, score, status)| {
            json!({
                "area": area,
                "status": status,
                "score": score,
                "summary": format!("Your {area} shows a steady presence."),
            })
        })
        .collect();

    let detailed_breakdown: Vec<Value> = areas
        .iter()
        .map(|(area, score, status)| {
            json!({
                "area": area,
                "score": score,
                "status": status,
                "intro": format!("A closer look at {area}."),
                "whatsGoingWell": ["You keep showing up.", "You notice your patterns."],
                "whereToImprove": ["Pause before responding.", "Name the feeling first."],
                "howYouCompare": "Top-quartile leaders regulate responses in most high-stress situations.",
                "quickWins": ["Take one mindful breath before meetings.", "End the day with a two-line journal."],
            })
        })
        .collect();

    let six_month_plan: Vec<Value> = (1..=6)
        .map(|month| {
            json!({
                "month": month,
                "theme": format!("Month {month} theme"),
                "tasks": ["Practice the pause.", "Review your week.", "Check in with one report."],
                "kpi": format!("KPI for month {month}"),
            })
        })
        .collect();

    json!({
        "executiveSummary": {
            "overallScore": 66,
            "oneSentenceAssessment": "You lead with genuine curiosity and a steady presence.",
            "primaryStrength": "Self-awareness",
            "keyInsight": "Your clarity grows when you pause before reacting.",
            "positiveReinforcement": "You are already doing the hardest part: looking honestly.",
        },
        "focusAreas": focus_areas,
        "top3Priorities": [
            {
                "priorityNumber": 1,
                "title": "Cultivate Mindful Presence in High-Stakes Meetings",
                "description": "Presence is your lever for everything else.",
                "month1Tasks": ["Arrive two minutes early.", "Write an intention before each meeting."],
                "expectedResult": "Calmer, clearer meetings.",
            },
            {
                "priorityNumber": 2,
                "title": "Name Emotions Before Acting",
                "description": "Labeling reduces reactivity.",
                "month1Tasks": ["Keep a feelings vocabulary list."],
                "expectedResult": "Fewer regretted reactions.",
            },
            {
                "priorityNumber": 3,
                "title": "Protect One Strategic Hour",
                "description": "Strategy needs unclaimed time.",
                "month1Tasks": ["Block Friday mornings.", "Turn off notifications for that hour."],
                "expectedResult": "A visible strategic rhythm.",
            },
        ],
        "detailedBreakdown": detailed_breakdown,
        "sixMonthPlan": six_month_plan,
        "dailyTasks": [
            { "title": "Morning intention", "description": "Set one intention for the day.", "category": "Awareness", "cadence": "Daily" },
            { "title": "Pause practice", "description": "One deliberate pause before reacting.", "category": "Regulation", "cadence": "Daily" },
            { "title": "Coach a teammate", "description": "One coaching conversation.", "category": "Connection", "cadence": "Weekly" },
            { "title": "Weekly review", "description": "Reflect on wins and friction.", "category": "Reflection", "cadence": "Weekly" },
            { "title": "Strategy block", "description": "Protected strategic thinking time.", "category": "Action", "cadence": "Weekly" },
            { "title": "Well-being audit", "description": "Check energy, sleep, boundaries.", "category": "Reflection", "cadence": "Monthly" },
        ],
    })
}

/// Wrap report JSON in the generation API's response envelope.
pub fn gemini_envelope(report: &Value) -> Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": report.to_string() } ] } }
        ]
    })
}

/// App state whose gateway points at a local fake boundary.
pub fn app_state(base_url: &str) -> AppState {
    AppState {
        sessions: SessionStore::new(),
        gemini: GeminiClient::new("test-key".to_string(), "gemini-2.5-flash".to_string())
            .with_base_url(base_url.to_string()),
    }
}
