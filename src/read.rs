extern crate termcolor;

use std::io::{stdin, Write};
use termcolor::{Color, StandardStream, WriteColor};

#[allow(unused_must_use)]
pub fn read_line_to(stdout: &mut StandardStream, prompt: &[u8], dest: &mut String) {
    dest.clear();
    loop {
        stdout.write(prompt);
        stdout.flush();
        match stdin().read_line(dest) {
            Ok(_) => {
                dest.truncate(dest.trim_end().len());
                return;
            }
            Err(e) => write_error!(stdout, "Error", "Read: {}", e.to_string()),
        }
        stdout.reset();
    }
}
pub fn read_line(stdout: &mut StandardStream, prompt: &[u8]) -> String {
    let mut ret = String::new();
    read_line_to(stdout, prompt, &mut ret);
    ret
}
pub fn read_flag(stdout: &mut StandardStream, prompt: &[u8], default: bool) -> bool {
    match read_line(stdout, prompt).trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" | "true" => true,
        _ => false,
    }
}
