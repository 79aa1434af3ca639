use maud::{html, Markup};
use rust_i18n::t;

use crate::{names, views::components};

/// The Grenada retreat information page.
pub fn retreat() -> Markup {
    html! {
        header."page-hero retreat-hero" {
            p."retreat-date" { (t!("retreat.date_line")) }
            h1 { (t!("retreat.heading")) }
            h2 { (t!("retreat.subheading")) }
            p { (t!("retreat.lede")) }
            p { strong { (t!("retreat.alignment")) } }
            div {
                (components::nav_link(names::CLARITY_CALL_URL, html! {
                    span role="button" { (t!("retreat.cta")) }
                }))
                p."cta-hint" { (t!("retreat.cta_hint")) }
            }
        }

        section {
            h2 { (t!("retreat.leave_with")) }
            div."grid" {
                article {
                    h4 { (t!("retreat.outcome_confidence_title")) }
                    p { (t!("retreat.outcome_confidence")) }
                }
                article {
                    h4 { (t!("retreat.outcome_agency_title")) }
                    p { (t!("retreat.outcome_agency")) }
                }
            }
            div."grid" {
                article {
                    h4 { (t!("retreat.outcome_system_title")) }
                    p { (t!("retreat.outcome_system")) }
                }
                article {
                    h4 { (t!("retreat.outcome_practices_title")) }
                    p { (t!("retreat.outcome_practices")) }
                }
            }
            p."retreat-motto" { (t!("retreat.motto")) }
        }
    }
}
