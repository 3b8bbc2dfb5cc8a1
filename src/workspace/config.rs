extern crate serde;
extern crate serde_json;

use crate::error::Result;
use serde::Deserialize;
use std::{env, fs, path::PathBuf};

pub mod poll {
    use std::time::Duration;
    pub const ROUNDS: u32 = 30;
    pub const DELAY: Duration = Duration::from_secs(1);
}

pub const HOME_DIR: &str = ".lc-workspace";
pub const DEFAULT_LANG: &str = "java";

const CONFIG_FILE: &str = "config.json";
const SESSION_FILE: &str = "session.json";
const PROBLEMS_FILE: &str = "problems.json";
const PROBLEMS_TMP_FILE: &str = "problems_tmp.txt";
const ACLIST_FILE: &str = "ac.txt";
const PROBLEMS_HOME: &str = "problems";
const SOLUTIONS_HOME: &str = "solutions";

#[derive(Deserialize, Default)]
struct FileConfig {
    default_lang: Option<String>,
    repo_path: Option<PathBuf>,
    sound_player: Option<String>,
    pass_ringtone: Option<PathBuf>,
    send_ringtone: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub home: PathBuf,
    pub default_lang: String,
    pub repo_path: Option<PathBuf>,
    pub sound_player: Option<String>,
    pub pass_ringtone: Option<PathBuf>,
    pub send_ringtone: Option<PathBuf>,
}

impl Config {
    /// Built once per session from `<home>/config.json`; a missing file means
    /// defaults, a malformed one is a decode error.
    pub fn load(home: Option<PathBuf>) -> Result<Self> {
        let home = match home {
            Some(p) => p,
            None => PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from(".")))
                .join(HOME_DIR),
        };
        let file = home.join(CONFIG_FILE);
        let parsed: FileConfig = if file.exists() {
            serde_json::from_str(&fs::read_to_string(&file)?)?
        } else {
            FileConfig::default()
        };
        let config = Config {
            default_lang: parsed
                .default_lang
                .unwrap_or_else(|| String::from(DEFAULT_LANG)),
            repo_path: parsed.repo_path,
            sound_player: parsed.sound_player,
            pass_ringtone: parsed.pass_ringtone,
            send_ringtone: parsed.send_ringtone,
            home,
        };
        config.init_home()?;
        Ok(config)
    }

    pub fn with_home(home: PathBuf) -> Self {
        Config {
            home,
            default_lang: String::from(DEFAULT_LANG),
            repo_path: None,
            sound_player: None,
            pass_ringtone: None,
            send_ringtone: None,
        }
    }

    fn init_home(&self) -> Result<()> {
        fs::create_dir_all(self.problems_home())?;
        fs::create_dir_all(self.solutions_home())?;
        Ok(())
    }

    pub fn session_file(&self) -> PathBuf {
        self.home.join(SESSION_FILE)
    }
    pub fn problems_file(&self) -> PathBuf {
        self.home.join(PROBLEMS_FILE)
    }
    pub fn problems_tmp_file(&self) -> PathBuf {
        self.home.join(PROBLEMS_TMP_FILE)
    }
    pub fn aclist_file(&self) -> PathBuf {
        self.home.join(ACLIST_FILE)
    }
    pub fn problems_home(&self) -> PathBuf {
        self.home.join(PROBLEMS_HOME)
    }
    pub fn solutions_home(&self) -> PathBuf {
        self.home.join(SOLUTIONS_HOME)
    }
    pub fn question_cache(&self, compact: &str) -> PathBuf {
        self.problems_home().join(format!("{}.json", compact))
    }
    pub fn solution_file(&self, lang: &str, file_name: &str) -> PathBuf {
        self.solutions_home().join(lang).join(file_name)
    }
    /// Mirror location inside the configured solution repository, if any.
    pub fn repo_solution_file(&self, lang: &str, file_name: &str) -> Option<PathBuf> {
        self.repo_path
            .as_ref()
            .map(|repo| repo.join(SOLUTIONS_HOME).join(lang).join(file_name))
    }
}
