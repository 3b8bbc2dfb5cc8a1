extern crate termcolor;

use lc_workspace::error::Result;
use std::{io::Write, path::PathBuf};
use termcolor::{Color, StandardStream};

#[allow(unused_must_use)]
pub fn write_outcome(stdout: &mut StandardStream, result: Result<(PathBuf, String)>) {
    match result {
        Ok((path, msg)) => write_ok!(stdout, "Success", "{} ({})", msg, path.display()),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}

#[allow(unused_must_use)]
pub fn write_report(stdout: &mut StandardStream, result: Result<String>) {
    match result {
        Ok(report) => write_ok!(stdout, "Result", "{}", report),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}
