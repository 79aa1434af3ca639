use maud::{html, Markup};
use rust_i18n::t;

/// Static mini-course overview page. Course delivery itself happens
/// elsewhere; this is informational only.
pub fn mini_course() -> Markup {
    let days = [
        ("course.day1_title", "course.day1_video"),
        ("course.day2_title", "course.day2_video"),
        ("course.day3_title", "course.day3_video"),
        ("course.day4_title", "course.day4_video"),
        ("course.day5_title", "course.day5_video"),
    ];

    html! {
        header."page-hero" {
            h1 { (t!("course.heading")) }
            p { (t!("course.subtitle")) }
        }

        article {
            header { h2 { (t!("course.overview")) } }
            div."grid" {
                div {
                    h4 { (t!("course.what_title")) }
                    ul {
                        li { (t!("course.what_videos")) }
                        li { (t!("course.what_workbook")) }
                        li { (t!("course.what_practice")) }
                        li { (t!("course.what_audio")) }
                        li { (t!("course.what_community")) }
                    }
                }
                div {
                    h4 { (t!("course.who_title")) }
                    ul {
                        li { (t!("course.who_reactive")) }
                        li { (t!("course.who_clarity")) }
                        li { (t!("course.who_generic")) }
                        li { (t!("course.who_ready")) }
                    }
                }
                div {
                    h4 { (t!("course.invest_title")) }
                    ul {
                        li { (t!("course.invest_self")) }
                        li { (t!("course.invest_supported")) }
                        li { (t!("course.invest_free")) }
                    }
                }
            }
        }

        @for (day, (title, video)) in days.iter().enumerate() {
            article."course-module" {
                p."day-label" { (t!("course.day", day = day + 1)) }
                h3 { (t!(*title)) }
                p { "\u{25B6} " (t!(*video)) }
            }
        }
    }
}
