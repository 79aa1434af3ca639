use maud::{html, Markup};
use rust_i18n::t;

use crate::{names, report::ReportData, session::Session, views::components};

pub fn dashboard(session: &Session) -> Markup {
    match session.report.as_ref() {
        Some(data) => summary(data),
        None => intro(),
    }
}

/// Landing pitch shown before any report exists.
fn intro() -> Markup {
    html! {
        section."intro" {
            h1 { (t!("intro.headline")) }
            p."intro-lede" { (t!("intro.lede")) }

            p."intro-time" { "\u{23F1} " (t!("intro.time_estimate")) }

            ul."intro-benefits" {
                li { (t!("intro.benefit_discover")) }
                li { (t!("intro.benefit_goals")) }
                li { (t!("intro.benefit_plan")) }
                li { (t!("intro.benefit_score")) }
            }

            button."primary"
                   hx-post=(names::START_QUIZ_URL)
                   hx-target="main"
                   hx-swap="innerHTML" {
                (t!("intro.start"))
            }

            div {
                button."outline secondary demo-link"
                       hx-post=(names::DEMO_RUN_URL)
                       hx-target="main"
                       hx-swap="innerHTML" {
                    (t!("intro.demo"))
                }
            }

            article."privacy-note" {
                h4 { "\u{1F512} " (t!("intro.privacy_title")) }
                p { (t!("intro.privacy_body")) }
            }
        }
    }
}

/// Post-report summary: today's tasks at a glance plus the health overview.
fn summary(data: &ReportData) -> Markup {
    let total_tasks = data.daily_tasks.len();
    let done_tasks = data.daily_tasks.iter().filter(|t| t.completed).count();

    html! {
        h1 { (t!("dashboard.greeting")) " \u{2728}" }
        p { (t!("dashboard.subtitle")) }

        article {
            header {
                h3 { (t!("dashboard.todays_tasks")) }
            }
            @if total_tasks > 0 && done_tasks == total_tasks {
                p."all-done" { (t!("dashboard.all_done")) }
            } @else {
                p { (t!("dashboard.tasks_progress", done = done_tasks, total = total_tasks)) }
            }
            (components::nav_link(names::DAILY_TASKS_URL, html! { (t!("dashboard.view_all")) }))
        }

        article {
            header {
                h3 { (t!("dashboard.health_summary")) }
            }
            div."health-summary" {
                (components::score_ring(data.executive_summary.overall_score))
                div."health-rows" {
                    @for area in &data.focus_areas {
                        div."health-row" {
                            span { (area.area.label()) }
                            (components::status_badge(area.status))
                        }
                    }
                }
            }
        }
    }
}
