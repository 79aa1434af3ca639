pub const DASHBOARD_URL: &str = "/";
pub const START_QUIZ_URL: &str = "/start-quiz";
pub const DEMO_RUN_URL: &str = "/demo-run";
pub const QUIZ_URL: &str = "/quiz";
pub const SUBMIT_ANSWER_URL: &str = "/quiz/answer";
pub const SUBMIT_QUIZ_URL: &str = "/quiz/submit";
pub const GENERATING_URL: &str = "/generating";
pub const REPORT_URL: &str = "/report";
pub const EXPORT_REPORT_URL: &str = "/report/export";
pub const RETAKE_URL: &str = "/retake";
pub const ACTION_PLAN_URL: &str = "/action-plan";
pub const ADD_PRIORITY_URL: &str = "/priority/add";
pub const DAILY_TASKS_URL: &str = "/daily-tasks";
pub const ADD_TASK_URL: &str = "/task/add";
pub const MINI_COURSE_URL: &str = "/mini-course";
pub const CLARITY_CALL_URL: &str = "/clarity-call";
pub const BOOK_CALL_URL: &str = "/book-call";
pub const CALENDAR_URL: &str = "/calendar";
pub const RETREAT_URL: &str = "/retreat";

pub const SESSION_COOKIE_NAME: &str = "plan_session";

pub fn quiz_section_url(section_idx: usize) -> String {
    format!("/quiz?section={section_idx}")
}

pub fn toggle_priority_url(priority_number: u32) -> String {
    format!("/priority/{priority_number}/toggle")
}

pub fn toggle_task_url(task_idx: usize) -> String {
    format!("/task/{task_idx}/toggle")
}

// Likert scale bounds
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
