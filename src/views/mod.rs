pub mod call;
pub mod components;
pub mod course;
pub mod dashboard;
pub mod layout;
pub mod plan;
pub mod quiz;
pub mod report;
pub mod retreat;
pub mod tasks;

use maud::Markup;
use rust_i18n::t;

pub use layout::{page, page_with_report, titled};

use crate::session::{Session, View};

/// Fragment for htmx requests, full page shell otherwise.
pub fn render(is_htmx: bool, title: &str, body: Markup, report_ready: bool) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page_with_report(title, body, report_ready)
    }
}

/// Render whatever view the session is currently on. The navigation guard
/// keeps report-dependent views unreachable without a report, so the
/// catch-all only ever fires for the dashboard.
pub fn active(session: &Session) -> (String, Markup) {
    match (session.view, session.report.as_ref()) {
        (View::Quiz, _) => (
            t!("title.quiz").into_owned(),
            quiz::quiz(session, quiz::Notice::from_session(session)),
        ),
        (View::Loading, _) => (t!("title.loading").into_owned(), quiz::loading()),
        (View::Report, Some(data)) => (t!("title.report").into_owned(), report::report(data)),
        (View::ActionPlan, Some(data)) => {
            (t!("title.action_plan").into_owned(), plan::action_plan(data))
        }
        (View::DailyTasks, Some(data)) => {
            (t!("title.daily_tasks").into_owned(), tasks::daily_tasks(data))
        }
        (View::MiniCourse, _) => (t!("title.mini_course").into_owned(), course::mini_course()),
        (View::ClarityCall, _) => (t!("title.clarity_call").into_owned(), call::clarity_call()),
        (View::Calendar, _) => (t!("title.calendar").into_owned(), call::calendar()),
        (View::Retreat, _) => (t!("title.retreat").into_owned(), retreat::retreat()),
        _ => (
            t!("title.dashboard").into_owned(),
            dashboard::dashboard(session),
        ),
    }
}
