use maud::{html, Markup, PreEscaped};
use rust_i18n::t;

use crate::{names, report::ReportData, views::components};

pub fn report(data: &ReportData) -> Markup {
    html! {
        div."report" {
            div."report-header" {
                h1 { (t!("report.heading")) }
                div."report-actions" {
                    a."outline" role="button" href=(names::EXPORT_REPORT_URL) target="_blank" {
                        (t!("report.export"))
                    }
                    button."outline" onclick="window.print()" {
                        (t!("report.print"))
                    }
                }
            }

            (glance(data))
            (focus_now(data))
            (closer_look(data))
            (top_goals(data))
            (roadmap(data))
            (whats_next())
        }
    }
}

fn glance(data: &ReportData) -> Markup {
    let summary = &data.executive_summary;
    html! {
        article."avoid-break" {
            header { h2 { (t!("report.glance")) } }
            div."glance-body" {
                (components::score_ring(summary.overall_score))
                div."glance-text" {
                    p."assessment" { (summary.one_sentence_assessment) }
                    div."banner banner-success" {
                        p { strong { (t!("report.primary_strength")) ": " } (summary.positive_reinforcement) }
                    }
                    div."banner banner-warning" {
                        p { strong { (t!("report.key_insight")) ": " } (summary.key_insight) }
                    }
                }
            }
        }
    }
}

fn focus_now(data: &ReportData) -> Markup {
    html! {
        article."avoid-break" {
            header { h2 { (t!("report.focus_now")) } }
            div."focus-rows" {
                @for area in &data.focus_areas {
                    div."focus-row" {
                        h4 { (area.area.label()) }
                        (components::focus_bar(area.status, area.score))
                        (components::status_badge(area.status))
                    }
                }
            }
        }
    }
}

fn closer_look(data: &ReportData) -> Markup {
    html! {
        @if !data.detailed_breakdown.is_empty() {
            h2."section-heading" { (t!("report.closer_look")) }
            @for detail in &data.detailed_breakdown {
                article."avoid-break" {
                    header {
                        h3 { (detail.area.label()) }
                        p { strong { (detail.score) "%" } " \u{00B7} " (components::status_badge(detail.status)) }
                    }
                    p { (detail.intro) }

                    div."two-cols" {
                        div {
                            h4."going-well" { (t!("report.going_well")) }
                            ul {
                                @for item in &detail.whats_going_well {
                                    li { "\u{2713} " (item) }
                                }
                            }
                        }
                        div {
                            h4."to-improve" { (t!("report.to_improve")) }
                            ul {
                                @for item in &detail.where_to_improve {
                                    li { "\u{2192} " (item) }
                                }
                            }
                        }
                    }

                    h4 { (t!("report.how_you_compare")) }
                    p { (detail.how_you_compare) }

                    div."banner banner-info" {
                        h4 { (t!("report.quick_wins")) }
                        ul {
                            @for item in &detail.quick_wins {
                                li { (PreEscaped("&#8227; ")) (item) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn top_goals(data: &ReportData) -> Markup {
    html! {
        article."avoid-break" {
            header { h2 { (t!("report.top_goals")) } }
            @for goal in &data.top3_priorities {
                div."goal" {
                    h3 { (t!("report.goal_number", number = goal.priority_number)) ": " (goal.title) }
                    p { (goal.description) }
                    h4 { (t!("report.month1_tasks")) }
                    ul {
                        @for task in &goal.month1_tasks {
                            li { (task) }
                        }
                    }
                    div."banner banner-success" {
                        p { strong { (t!("report.expected_result")) ": " } (goal.expected_result) }
                    }
                }
            }
        }
    }
}

fn roadmap(data: &ReportData) -> Markup {
    html! {
        article."avoid-break" {
            header { h2 { (t!("report.roadmap")) } }
            @for phase in &data.six_month_plan {
                div."phase" {
                    h3 { (t!("report.month", month = phase.month)) ": " (phase.theme) }
                    h4 { (t!("report.phase_tasks")) }
                    ul {
                        @for task in &phase.tasks {
                            li { (task) }
                        }
                    }
                    p { strong { (phase.kpi) } }
                }
            }
        }
    }
}

fn whats_next() -> Markup {
    html! {
        article."whats-next no-print" {
            h2 { (t!("report.whats_next")) }
            p { (t!("report.whats_next_body")) }
            button."secondary"
                   hx-post=(names::RETAKE_URL)
                   hx-target="main"
                   hx-swap="innerHTML"
                   hx-confirm=(t!("report.retake_confirm")) {
                (t!("report.retake"))
            }
        }
    }
}
