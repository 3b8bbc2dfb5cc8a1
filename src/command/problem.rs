extern crate termcolor;

use crate::{
    read::{read_flag, read_line},
    sound::Sound,
    write::{write_outcome, write_report},
};
use lc_workspace::{
    line::{compact_name, Decoder, ProblemRef},
    notify::{Event, Notifier},
    session::Session,
};
use std::io::Write;
use termcolor::{Color, StandardStream, WriteColor};

#[allow(unused_must_use)]
pub async fn list(stdout: &mut StandardStream, session: &Session, notifier: &Sound) {
    notifier.notify(Event::Sent);
    let category = {
        let c = read_line(stdout, b"Category [all]: ");
        let trimmed = c.trim();
        if trimmed.is_empty() {
            String::from("all")
        } else {
            trimmed.to_owned()
        }
    };
    let use_cache = read_flag(stdout, b"Use cached catalogue? [Y/n]: ", true);
    write_info!(stdout, "Info", "Loading problems...");
    write_outcome(stdout, session.list_problems(&category, use_cache).await);
}

#[allow(unused_must_use)]
pub async fn cards(stdout: &mut StandardStream, session: &Session, notifier: &Sound) {
    notifier.notify(Event::Sent);
    let category = {
        let c = read_line(stdout, b"Category [learn]: ");
        let trimmed = c.trim();
        if trimmed.is_empty() {
            String::from("learn")
        } else {
            trimmed.to_owned()
        }
    };
    write_outcome(stdout, session.list_cards(&category).await);
}

#[allow(unused_must_use)]
fn read_reference(stdout: &mut StandardStream, decoder: &Decoder) -> Option<ProblemRef> {
    loop {
        let line = read_line(stdout, b"Problem line or solution file name: ");
        if line.trim().is_empty() {
            return None;
        }
        match decoder.decode(&line) {
            Some(r) => return Some(r),
            None => write_error!(stdout, "Error", "No identifying data in line!"),
        }
        stdout.reset();
    }
}

#[allow(unused_must_use)]
pub async fn problem_loop(stdout: &mut StandardStream, session: &Session, notifier: &Sound) {
    let reference = match read_reference(stdout, &Decoder::new()) {
        Some(r) => r,
        None => return,
    };
    let lang = {
        let l = read_line(stdout, b"Language (empty for default): ");
        let l = l.trim().to_lowercase();
        if l.is_empty() {
            reference
                .lang
                .map(str::to_owned)
                .unwrap_or_else(|| session.config().default_lang.clone())
        } else {
            l
        }
    };
    let id = reference.id;
    let slug = reference.title_slug.as_str();
    notifier.notify(Event::Sent);
    write_outcome(stdout, session.open_solution(id, slug, &lang, true).await);
    stdout.reset();
    let prompt = format!("lc-workspace [{}]> ", compact_name(id, slug));
    loop {
        match read_line(stdout, prompt.as_bytes()).trim() {
            "run" => {
                let tests = read_line(
                    stdout,
                    b"Testcases (//n// for newline, empty for sample): ",
                )
                .trim()
                .replace("//n//", "\n");
                let tests = if tests.is_empty() { None } else { Some(tests) };
                notifier.notify(Event::Sent);
                write_info!(stdout, "Info", "Testing...");
                write_report(
                    stdout,
                    session.run_sample(id, slug, &lang, tests.as_deref()).await,
                );
            }
            "submit" => {
                notifier.notify(Event::Sent);
                write_info!(stdout, "Info", "Submitting...");
                write_report(stdout, session.submit(id, slug, &lang).await);
            }
            "reset" => {
                notifier.notify(Event::Sent);
                write_outcome(stdout, session.open_solution(id, slug, &lang, false).await);
            }
            "latest" => {
                notifier.notify(Event::Sent);
                write_outcome(
                    stdout,
                    session.fetch_latest_submission(id, slug, &lang).await,
                );
            }
            "unselect" => {
                write_info!(stdout, "Info", "Unselected problem");
                break;
            }
            unknown => write_error!(stdout, "Error", "problem: Unknown command {}", unknown),
        }
        stdout.reset();
    }
    stdout.reset();
}
