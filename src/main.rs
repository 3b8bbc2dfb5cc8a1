extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use clap::{crate_description, crate_name, App, Arg};
use lc_workspace::{config::Config, session::Session};
use pretty_env_logger::init_timed;
use std::{io::Write, path::PathBuf};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod problem;
    pub mod session;
}
mod read;
mod sound;
mod write;

use command::{problem, session as session_command};
use read::read_line;

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = App::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(Arg::new("home").help("Path to the workspace directory"))
        .get_matches();
    let config = match Config::load(app.value_of("home").map(PathBuf::from)) {
        Ok(c) => c,
        Err(e) => {
            write_error!(&mut stdout, "Error", "Error loading workspace: {}", e);
            return;
        }
    };
    let notifier = sound::Sound::from_config(&config);
    let mut session = Session::new(config).with_notifier(Box::new(notifier.clone()));
    loop {
        match read_line(&mut stdout, b"lc-workspace> ").trim() {
            "login" => session_command::login(&mut stdout, &mut session, &notifier),
            "list" => problem::list(&mut stdout, &session, &notifier).await,
            "cards" => problem::cards(&mut stdout, &session, &notifier).await,
            "progress" => session_command::progress(&mut stdout, &session, &notifier).await,
            "open" => problem::problem_loop(&mut stdout, &session, &notifier).await,
            "exit" => break,
            unknown => write_error!(
                &mut stdout,
                "Error",
                r#"lc-workspace: unknown command "{}""#,
                unknown
            ),
        }
        stdout.reset();
    }
}
