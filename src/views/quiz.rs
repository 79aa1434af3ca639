use maud::{html, Markup};
use rust_i18n::t;

use crate::{catalog, names, session::Session, views::components};

/// Banner state above the quiz form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    None,
    /// Submission attempted with unanswered questions.
    Incomplete,
    /// The last generation attempt failed; answers are preserved.
    GenerationFailed,
}

impl Notice {
    pub fn from_session(session: &Session) -> Notice {
        if session.generation_failed {
            Notice::GenerationFailed
        } else {
            Notice::None
        }
    }
}

pub fn quiz(session: &Session, notice: Notice) -> Markup {
    let sections = catalog::sections();
    let section_idx = session.section_idx.min(sections.len() - 1);
    let section = &sections[section_idx];
    let is_last = section_idx == sections.len() - 1;
    let first_number = catalog::first_question_number(section_idx);

    html! {
        div."quiz-header" {
            h1 { (t!("quiz.heading")) }
            (components::nav_link(names::DASHBOARD_URL, html! { "\u{2190} " (t!("quiz.back_to_dashboard")) }))
        }

        div."quiz-progress-row" {
            h2 { (section.title) }
            (progress(session.completion_count(), catalog::total_questions()))
        }

        @match notice {
            Notice::Incomplete => {
                article."banner banner-error" {
                    strong { (t!("quiz.incomplete_title")) }
                    p { (t!("quiz.incomplete_body")) }
                }
            }
            Notice::GenerationFailed => {
                article."banner banner-error" {
                    strong { (t!("quiz.error_title")) }
                    p { (t!("quiz.generation_error")) }
                }
            }
            Notice::None => {}
        }

        div."questions" {
            @for (i, question) in section.questions.iter().enumerate() {
                div."question" {
                    p."question-text" { (first_number + i) ". " (question.text) }
                    div."likert" {
                        span."likert-end" { (catalog::RATING_LABELS[0].1) }
                        div."likert-options" {
                            @for (value, _) in catalog::RATING_LABELS {
                                label."likert-option" {
                                    input type="radio"
                                          name=(question.id)
                                          value=(value)
                                          checked[session.answers.get(&question.id) == Some(&value)]
                                          hx-post=(names::SUBMIT_ANSWER_URL)
                                          hx-ext="json-enc"
                                          hx-vals=(format!(r#"{{"question_id":"{}","rating":{}}}"#, question.id, value))
                                          hx-target="#quiz-progress"
                                          hx-swap="outerHTML";
                                    span."likert-value" { (value) }
                                }
                            }
                        }
                        span."likert-end" { (catalog::RATING_LABELS[4].1) }
                    }
                }
            }
        }

        div."quiz-nav" {
            @if section_idx > 0 {
                button."secondary"
                       hx-get=(names::quiz_section_url(section_idx - 1))
                       hx-target="main"
                       hx-swap="innerHTML" {
                    (t!("quiz.back"))
                }
            } @else {
                span {}
            }

            @if is_last {
                button."primary"
                       hx-post=(names::SUBMIT_QUIZ_URL)
                       hx-target="main"
                       hx-swap="innerHTML" {
                    (t!("quiz.get_report"))
                }
            } @else {
                button hx-get=(names::quiz_section_url(section_idx + 1))
                       hx-target="main"
                       hx-swap="innerHTML" {
                    (t!("quiz.next"))
                }
            }
        }
    }
}

/// Answered-count fragment, swapped in place after every answer.
pub fn progress(answered: usize, total: usize) -> Markup {
    html! {
        div id="quiz-progress" class="quiz-progress" {
            span { (t!("quiz.progress", answered = answered, total = total)) }
            progress value=(answered) max=(total) {}
        }
    }
}

/// Shown while the plan is being generated. Polls until the session
/// resolves out of the loading state.
pub fn loading() -> Markup {
    html! {
        div."loading"
            hx-get=(names::GENERATING_URL)
            hx-trigger="every 2s"
            hx-target="main"
            hx-swap="innerHTML" {
            div."spinner" aria-busy="true" {}
            h2 { (t!("loading.heading")) }
            p { (t!("loading.body")) }
            article."banner banner-info" {
                strong { (t!("loading.tip_title")) }
                p { (t!("loading.tip_body")) }
            }
        }
    }
}
