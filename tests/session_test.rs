mod common;

use clarityplan::catalog;
use clarityplan::report::{self, Cadence, ReportData, TaskCategory};
use clarityplan::session::{NewPriority, NewTask, Session, View};
use common::canned_report;

fn generated_report() -> ReportData {
    report::ingest(&canned_report().to_string()).expect("canned report should ingest")
}

fn session_with_report() -> Session {
    let mut session = Session::default();
    let generation = session.begin_generation();
    session.resolve_generation(generation, Ok(generated_report()));
    session
}

fn answer_everything(session: &mut Session) {
    for section in catalog::sections() {
        for question in &section.questions {
            session.set_answer(&question.id, 3);
        }
    }
}

// ─── Answer store ───

#[test]
fn ratings_outside_likert_range_are_rejected() {
    let mut session = Session::default();
    assert!(!session.set_answer("q1", 0));
    assert!(!session.set_answer("q1", 6));
    assert_eq!(session.completion_count(), 0);

    assert!(session.set_answer("q1", 1));
    assert!(session.set_answer("q1", 5));
    assert_eq!(session.completion_count(), 1, "overwrite, not append");
    assert_eq!(session.answers.get("q1"), Some(&5));
}

#[test]
fn unknown_question_ids_are_accepted_permissively() {
    let mut session = Session::default();
    assert!(session.set_answer("q999", 3));
    assert_eq!(session.completion_count(), 1);

    for section in catalog::sections() {
        for question in &section.questions {
            assert!(session.set_answer(&question.id, 4));
        }
    }
    assert_eq!(session.completion_count(), catalog::total_questions() + 1);
}

#[test]
fn completion_requires_every_question() {
    let mut session = Session::default();
    answer_everything(&mut session);
    assert!(session.is_complete());

    let mut partial = Session::default();
    partial.set_answer("q1", 3);
    assert!(!partial.is_complete());
}

// ─── Navigation guard ───

#[test]
fn report_views_are_unreachable_without_a_report() {
    for target in [View::Report, View::ActionPlan, View::DailyTasks] {
        let mut session = Session::default();
        session.navigate(View::MiniCourse);
        session.navigate(target);
        assert_eq!(session.view, View::MiniCourse, "guard must hold from any state");
    }
}

#[test]
fn report_views_open_once_a_report_exists() {
    let mut session = session_with_report();
    for target in [View::Report, View::ActionPlan, View::DailyTasks] {
        session.navigate(target);
        assert_eq!(session.view, target);
    }
}

#[test]
fn unguarded_views_are_mutually_reachable() {
    let mut session = Session::default();
    for target in [
        View::MiniCourse,
        View::ClarityCall,
        View::Calendar,
        View::Retreat,
        View::Dashboard,
    ] {
        session.navigate(target);
        assert_eq!(session.view, target);
    }
}

// ─── Generation lifecycle ───

#[test]
fn successful_generation_moves_loading_to_report() {
    let mut session = Session::default();
    answer_everything(&mut session);
    let generation = session.begin_generation();
    assert_eq!(session.view, View::Loading);

    session.resolve_generation(generation, Ok(generated_report()));
    assert_eq!(session.view, View::Report);
    assert!(session.report.is_some());
}

#[test]
fn failed_generation_returns_to_quiz_with_answers_preserved() {
    let mut session = Session::default();
    answer_everything(&mut session);
    let generation = session.begin_generation();

    session.resolve_generation(generation, Err(()));
    assert_eq!(session.view, View::Quiz);
    assert!(session.generation_failed);
    assert!(session.report.is_none());
    assert!(session.is_complete(), "answers survive a failed attempt");
}

#[test]
fn background_completion_does_not_yank_the_user_away() {
    let mut session = Session::default();
    answer_everything(&mut session);
    let generation = session.begin_generation();
    session.navigate(View::MiniCourse);

    session.resolve_generation(generation, Ok(generated_report()));
    assert_eq!(session.view, View::MiniCourse);
    assert!(session.report.is_some(), "report still lands");
}

#[test]
fn stale_generation_results_are_dropped() {
    let mut session = Session::default();
    answer_everything(&mut session);
    let old = session.begin_generation();
    session.retake();

    session.resolve_generation(old, Ok(generated_report()));
    assert!(session.report.is_none(), "retake supersedes the in-flight call");
    assert_eq!(session.view, View::Dashboard);
}

#[test]
fn start_quiz_clears_answers_and_error_state() {
    let mut session = Session::default();
    answer_everything(&mut session);
    let generation = session.begin_generation();
    session.resolve_generation(generation, Err(()));
    assert!(session.generation_failed);

    session.start_quiz();
    assert_eq!(session.view, View::Quiz);
    assert_eq!(session.completion_count(), 0);
    assert!(!session.generation_failed);
}

// ─── Local plan mutations ───

#[test]
fn toggling_a_task_twice_restores_the_original_state() {
    let mut session = session_with_report();
    let before = session.report.as_ref().unwrap().daily_tasks.clone();

    session.toggle_task(2);
    {
        let tasks = &session.report.as_ref().unwrap().daily_tasks;
        assert!(tasks[2].completed);
        for (i, task) in tasks.iter().enumerate() {
            if i != 2 {
                assert_eq!(*task, before[i], "only the targeted task changes");
            }
        }
    }

    session.toggle_task(2);
    assert_eq!(session.report.as_ref().unwrap().daily_tasks, before);
}

#[test]
fn toggling_out_of_bounds_or_without_report_is_a_silent_noop() {
    let mut session = Session::default();
    session.toggle_task(0);
    assert!(session.report.is_none());

    let mut session = session_with_report();
    let before = session.report.as_ref().unwrap().daily_tasks.clone();
    session.toggle_task(usize::MAX);
    assert_eq!(session.report.as_ref().unwrap().daily_tasks, before);
}

#[test]
fn priorities_toggle_by_stable_number_not_position() {
    let mut session = session_with_report();
    session.add_priority(NewPriority {
        title: "Delegate more".to_string(),
        description: String::new(),
        expected_result: String::new(),
    });

    session.toggle_priority(4);
    let priorities = &session.report.as_ref().unwrap().top3_priorities;
    assert!(priorities[3].completed);
    assert!(priorities[..3].iter().all(|p| !p.completed));

    // Unknown number: nothing happens.
    session.toggle_priority(99);
    assert_eq!(
        session
            .report
            .as_ref()
            .unwrap()
            .top3_priorities
            .iter()
            .filter(|p| p.completed)
            .count(),
        1
    );
}

#[test]
fn added_priorities_take_the_next_number() {
    let mut session = session_with_report();
    session.add_priority(NewPriority {
        title: "Fourth".to_string(),
        description: "d".to_string(),
        expected_result: "r".to_string(),
    });

    let report = session.report.as_ref().unwrap();
    let added = report.top3_priorities.last().unwrap();
    assert_eq!(added.priority_number, 4);
    assert!(!added.completed);
    assert!(added.month1_tasks.is_empty());

    let numbers: Vec<u32> = report
        .top3_priorities
        .iter()
        .map(|p| p.priority_number)
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4], "existing numbering untouched");
}

#[test]
fn first_priority_in_an_empty_list_is_number_one() {
    let mut session = session_with_report();
    session.report.as_mut().unwrap().top3_priorities.clear();

    session.add_priority(NewPriority {
        title: "First".to_string(),
        description: String::new(),
        expected_result: String::new(),
    });
    assert_eq!(
        session.report.as_ref().unwrap().top3_priorities[0].priority_number,
        1
    );
}

#[test]
fn added_tasks_append_without_renumbering() {
    let mut session = session_with_report();
    let before = session.report.as_ref().unwrap().daily_tasks.clone();

    session.add_task(NewTask {
        title: "Evening shutdown".to_string(),
        description: "Close the day deliberately.".to_string(),
        category: TaskCategory::Reflection,
        cadence: Cadence::Daily,
    });

    let tasks = &session.report.as_ref().unwrap().daily_tasks;
    assert_eq!(tasks.len(), before.len() + 1);
    assert_eq!(&tasks[..before.len()], &before[..], "existing indices stable");
    let added = tasks.last().unwrap();
    assert_eq!(added.title, "Evening shutdown");
    assert!(!added.completed);
}

// ─── Retake ───

#[test]
fn retake_discards_the_report_and_all_local_progress() {
    let mut session = session_with_report();
    session.toggle_task(0);
    session.toggle_priority(1);

    session.retake();
    assert!(session.report.is_none());
    assert_eq!(session.view, View::Dashboard);

    session.navigate(View::Report);
    assert_eq!(session.view, View::Dashboard, "guard is back in force");

    // A fresh generation starts from a clean slate: no completion flags
    // leak over from the discarded plan.
    let generation = session.begin_generation();
    session.resolve_generation(generation, Ok(generated_report()));
    let report = session.report.as_ref().unwrap();
    assert!(report.daily_tasks.iter().all(|t| !t.completed));
    assert!(report.top3_priorities.iter().all(|p| !p.completed));
}
