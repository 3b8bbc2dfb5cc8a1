use chrono::Local;
use std::{env, io::Write, path::Path, process::Command};

fn launch(cmd: &mut Command) -> String {
    cmd.output()
        .map(|out| String::from_utf8_lossy(&out.stdout).into_owned())
        .unwrap_or_default()
}
fn exec<I: std::iter::IntoIterator<Item = impl AsRef<std::ffi::OsStr>>>(
    cmd: &str,
    args: I,
) -> String {
    launch(Command::new(cmd).args(args))
}

fn get_branch() -> String {
    let branch = exec("git", &["symbolic-ref", "--short", "-q", "HEAD"]);
    let trim = branch.trim();
    if trim.is_empty() {
        exec("git", &["describe", "--tags", "--exact-match", "HEAD"])
            .trim()
            .to_string()
    } else {
        trim.to_string()
    }
}

fn main() {
    let profile = env::var("PROFILE").unwrap();
    let buf = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(buf.as_str());
    let branch = get_branch();
    let time = Local::now();
    write!(
        std::fs::File::create(out_dir.join("version")).expect("Failed to create version file"),
        "(git@{} {} {}) {}",
        exec("git", &["log", "-1", "--pretty=format:%h"]).trim(),
        branch,
        time.format("%Y-%m-%d"),
        profile
    )
    .unwrap();
    let mut f = std::io::BufWriter::new(
        std::fs::File::create(out_dir.join("long_version")).expect("Failed to create long version"),
    );
    writeln!(&mut f, "{}", profile).unwrap();
    writeln!(
        &mut f,
        "commit: {} git@{}",
        branch,
        exec("git", &["log", "-1", "--pretty=format:%H"]).trim()
    )
    .unwrap();
    writeln!(
        &mut f,
        "rustc: {} {}",
        exec(env::var("RUSTC").unwrap().as_str(), &["--version"]).trim(),
        env::var("TARGET").unwrap()
    )
    .unwrap();
    writeln!(&mut f, "date: {}", time.to_rfc3339()).unwrap();
}
