use maud::{html, Markup};
use rust_i18n::t;

use crate::names;

/// Pitch plus booking form for the 15-minute clarity call. The booking
/// itself is handled out of band; submitting only records the request and
/// moves to the confirmation page.
pub fn clarity_call() -> Markup {
    html! {
        header."page-hero" {
            h1 { (t!("call.heading")) }
            h2 { (t!("call.subtitle")) }
        }

        article {
            p { (t!("call.pitch_intro")) }
            p { (t!("call.pitch_list_intro")) }
            ul {
                li { strong { (t!("call.pitch_clarity_lead")) } " " (t!("call.pitch_clarity")) }
                li { strong { (t!("call.pitch_discover_lead")) } " " (t!("call.pitch_discover")) }
                li { strong { (t!("call.pitch_explore_lead")) } " " (t!("call.pitch_explore")) }
            }
            p."call-promise" { (t!("call.promise")) }
        }

        article {
            header { h3 { (t!("call.book_heading")) } }
            form hx-post=(names::BOOK_CALL_URL)
                 hx-ext="json-enc"
                 hx-target="main"
                 hx-swap="innerHTML" {
                label {
                    (t!("call.form_name"))
                    input name="name" type="text" placeholder=(t!("call.form_name_placeholder")) required;
                }
                label {
                    (t!("call.form_email"))
                    input name="email" type="email" placeholder="your@email.com" required;
                }
                label {
                    (t!("call.form_coach"))
                    select name="coach" {
                        option { "Either" }
                        option { "Lizamari" }
                        option { "Andre" }
                    }
                }
                label {
                    (t!("call.form_challenge"))
                    textarea name="challenge" rows="3" placeholder=(t!("call.form_challenge_placeholder")) {}
                }
                input type="submit" value=(t!("call.form_submit"));
            }
        }
    }
}

/// Booking confirmation, reached only through the booking action.
pub fn calendar() -> Markup {
    html! {
        article."confirmation" {
            div."confirmation-check" { "\u{2713}" }
            h1 { (t!("calendar.heading")) }
            p { (t!("calendar.check_email")) }

            div."banner banner-info" {
                h4 { (t!("calendar.expect_title")) }
                ol {
                    li { (t!("calendar.expect_confirmation")) }
                    li { (t!("calendar.expect_zoom")) }
                    li { (t!("calendar.expect_ready")) }
                }
            }

            p."call-promise" { (t!("calendar.waiting")) }

            button hx-get=(names::DASHBOARD_URL)
                   hx-target="main"
                   hx-push-url="true"
                   hx-swap="innerHTML" {
                (t!("calendar.back"))
            }
        }
    }
}
