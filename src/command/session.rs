extern crate termcolor;

use crate::{read::read_line, sound::Sound};
use lc_workspace::{notify::Event, notify::Notifier, session::Session};
use std::io::Write;
use termcolor::{Color, StandardStream};

#[allow(unused_must_use)]
pub fn login(stdout: &mut StandardStream, session: &mut Session, notifier: &Sound) {
    notifier.notify(Event::Sent);
    let endpoint = read_line(stdout, b"Endpoint [us/cn]: ");
    let csrftoken = read_line(stdout, b"csrftoken: ");
    let cookie = read_line(stdout, b"LEETCODE_SESSION: ");
    match session.login(
        endpoint.trim(),
        csrftoken.trim().to_owned(),
        cookie.trim().to_owned(),
    ) {
        Ok(()) => write_ok!(
            stdout,
            "Success",
            "Successfully logged in with browser cookie!"
        ),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}

#[allow(unused_must_use)]
pub async fn progress(stdout: &mut StandardStream, session: &Session, notifier: &Sound) {
    notifier.notify(Event::Sent);
    match session.fetch_progress().await {
        Ok(payload) => write_info!(stdout, "Info", "{}", payload),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}
