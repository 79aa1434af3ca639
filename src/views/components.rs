use maud::{html, Markup};

use crate::report::AreaStatus;

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (body)
        }
    }
}

/// SVG score ring, 0-100.
pub fn score_ring(score: u8) -> Markup {
    let radius = 42.0_f64;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let offset = circumference * (1.0 - f64::from(score.min(100)) / 100.0);
    let class = match AreaStatus::for_score(score) {
        AreaStatus::Strong => "ring-strong",
        AreaStatus::Developing => "ring-developing",
        AreaStatus::FocusArea => "ring-focus",
    };

    html! {
        div."score-ring" {
            svg viewBox="0 0 100 100" {
                circle class="ring-track" stroke-width="10" fill="transparent" r="42" cx="50" cy="50" {}
                circle class=(class) stroke-width="10"
                    stroke-dasharray=(format!("{circumference:.2}"))
                    stroke-dashoffset=(format!("{offset:.2}"))
                    stroke-linecap="round"
                    fill="transparent"
                    r="42" cx="50" cy="50"
                    transform="rotate(-90 50 50)" {}
            }
            span."score-ring-value" { (score) }
        }
    }
}

pub fn status_badge(status: AreaStatus) -> Markup {
    let class = match status {
        AreaStatus::Strong => "badge badge-strong",
        AreaStatus::Developing => "badge badge-developing",
        AreaStatus::FocusArea => "badge badge-focus",
    };
    html! {
        span class=(class) { (status.label()) }
    }
}

/// Horizontal score bar colored by status.
pub fn focus_bar(status: AreaStatus, score: u8) -> Markup {
    let class = match status {
        AreaStatus::Strong => "focus-bar-fill fill-strong",
        AreaStatus::Developing => "focus-bar-fill fill-developing",
        AreaStatus::FocusArea => "focus-bar-fill fill-focus",
    };
    html! {
        div."focus-bar" {
            div class=(class) style=(format!("width: {}%;", score.min(100))) {}
        }
    }
}
