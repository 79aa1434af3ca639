use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils, views::components};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
        script src="https://unpkg.com/htmx-ext-json-enc@2.0.1/json-enc.js" {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href="/" {
                            strong { (t!("app.name")) }
                        }
                    }
                }
                ul {
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn sidebar(report_ready: bool) -> Markup {
    let locked = |url: &str, key: &str| -> Markup {
        if report_ready {
            html! { li { (components::nav_link(url, html! { (t!(key)) })) } }
        } else {
            html! {
                li."locked" title=(t!("nav.locked_hint")) {
                    span { (t!(key)) " \u{1F512}" }
                }
            }
        }
    };

    html! {
        aside."sidebar" {
            nav {
                ul {
                    li { (components::nav_link(names::DASHBOARD_URL, html! { (t!("nav.dashboard")) })) }
                    (locked(names::REPORT_URL, "nav.report"))
                    (locked(names::ACTION_PLAN_URL, "nav.action_plan"))
                    (locked(names::DAILY_TASKS_URL, "nav.daily_tasks"))
                    li { (components::nav_link(names::MINI_COURSE_URL, html! { (t!("nav.mini_course")) })) }
                    li { (components::nav_link(names::CLARITY_CALL_URL, html! { (t!("nav.clarity_call")) })) }
                    li { (components::nav_link(names::RETREAT_URL, html! { (t!("nav.retreat")) })) }
                }
            }
        }
    }
}

fn shell(title: &str, body: Markup, report_ready: bool) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())
            (icon())

            title { (format!("{title} - {}", t!("app.name"))) }
        }

        body."container-fluid" {
            (header())
            div."app-shell" {
                (sidebar(report_ready))
                main { (body) }
            }
        }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    shell(title, body, false)
}

pub fn page_with_report(title: &str, body: Markup, report_ready: bool) -> Markup {
    shell(title, body, report_ready)
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - " (t!("app.name")) }
        (body)
    }
}
