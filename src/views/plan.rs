use maud::{html, Markup};
use rust_i18n::t;

use crate::{names, report::ReportData};

pub fn action_plan(data: &ReportData) -> Markup {
    html! {
        h1 { (t!("plan.heading")) }
        p { (t!("plan.subtitle")) }

        article {
            header { h2 { (t!("plan.priorities")) } }
            div."priorities" {
                @for priority in &data.top3_priorities {
                    div class=(if priority.completed { "priority done" } else { "priority" }) {
                        label {
                            input type="checkbox"
                                  checked[priority.completed]
                                  hx-post=(names::toggle_priority_url(priority.priority_number))
                                  hx-target="main"
                                  hx-swap="innerHTML";
                            div."priority-body" {
                                h3 { (priority.priority_number) ". " (priority.title) }
                                p { (priority.description) }
                                @if !priority.month1_tasks.is_empty() {
                                    ul {
                                        @for task in &priority.month1_tasks {
                                            li { (task) }
                                        }
                                    }
                                }
                                div."banner banner-success" {
                                    p { strong { (t!("plan.expected_result")) ": " } (priority.expected_result) }
                                }
                            }
                        }
                    }
                }
            }
            (add_priority_form())
        }

        article {
            header { h2 { (t!("plan.six_month")) } }
            div."phases" {
                @for phase in &data.six_month_plan {
                    div."phase-card" {
                        h3 { (t!("plan.month", month = phase.month)) ": " (phase.theme) }
                        p."label" { (t!("plan.key_tasks")) }
                        ul {
                            @for task in &phase.tasks {
                                li { (task) }
                            }
                        }
                        p."label" { (t!("plan.winning")) }
                        p { (phase.kpi) }
                    }
                }
            }
        }
    }
}

fn add_priority_form() -> Markup {
    html! {
        details."add-form" {
            summary role="button" class="outline" { (t!("plan.add_priority")) }
            form hx-post=(names::ADD_PRIORITY_URL)
                 hx-ext="json-enc"
                 hx-target="main"
                 hx-swap="innerHTML" {
                label {
                    (t!("plan.add_title"))
                    input name="title" type="text" placeholder=(t!("plan.add_title_placeholder")) required;
                }
                label {
                    (t!("plan.add_description"))
                    textarea name="description" rows="2" placeholder=(t!("plan.add_description_placeholder")) {}
                }
                label {
                    (t!("plan.add_expected"))
                    input name="expected_result" type="text" placeholder=(t!("plan.add_expected_placeholder"));
                }
                input type="submit" value=(t!("plan.add_submit"));
            }
        }
    }
}
