use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    names,
    report::{Cadence, ReportData, Task, TaskCategory},
};

pub fn daily_tasks(data: &ReportData) -> Markup {
    html! {
        h1 { (t!("tasks.heading")) }
        p { (t!("tasks.subtitle")) }

        article {
            @for cadence in Cadence::ALL {
                (cadence_group(data, cadence))
            }
            (add_task_form())
        }
    }
}

/// Tasks are addressed by their position in the full list, so the original
/// index travels with each task through the cadence grouping.
fn cadence_group(data: &ReportData, cadence: Cadence) -> Markup {
    let tasks: Vec<(usize, &Task)> = data
        .daily_tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.cadence == cadence)
        .collect();

    html! {
        @if !tasks.is_empty() {
            div."cadence-group" {
                h2 { (t!("tasks.group_heading", cadence = cadence.label())) }
                @for (index, task) in tasks {
                    div class=(if task.completed { "task done" } else { "task" }) {
                        label {
                            input type="checkbox"
                                  checked[task.completed]
                                  hx-post=(names::toggle_task_url(index))
                                  hx-target="main"
                                  hx-swap="innerHTML";
                            div."task-body" {
                                h3 { (task.category.icon()) " " (task.title) }
                                p { (task.description) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn add_task_form() -> Markup {
    html! {
        details."add-form" {
            summary role="button" class="outline" { (t!("tasks.add_task")) }
            form hx-post=(names::ADD_TASK_URL)
                 hx-ext="json-enc"
                 hx-target="main"
                 hx-swap="innerHTML" {
                label {
                    (t!("tasks.add_title"))
                    input name="title" type="text" placeholder=(t!("tasks.add_title_placeholder")) required;
                }
                label {
                    (t!("tasks.add_description"))
                    textarea name="description" rows="2" placeholder=(t!("tasks.add_description_placeholder")) {}
                }
                div."grid" {
                    label {
                        (t!("tasks.add_cadence"))
                        select name="cadence" {
                            @for cadence in Cadence::ALL {
                                option value=(cadence.label()) { (cadence.label()) }
                            }
                        }
                    }
                    label {
                        (t!("tasks.add_category"))
                        select name="category" {
                            @for category in TaskCategory::ALL {
                                option value=(category.label()) { (category.icon()) " " (category.label()) }
                            }
                        }
                    }
                }
                input type="submit" value=(t!("tasks.add_submit"));
            }
        }
    }
}
