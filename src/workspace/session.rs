extern crate log;
extern crate serde_json;

use crate::{
    catalog,
    config::Config,
    error::{not_found, Error, Kind, Result},
    judge::{response::Question, Client, Credentials, Endpoint},
    lang,
    line::compact_name,
    notify::{Event, Notifier, Silent},
    report, solution, solved, text,
};
use log::warn;
use serde_json::Value;
use std::{fs, path::PathBuf};

/// Owns the local workspace state and mediates between the editor adapter
/// and the judge client. One outstanding remote operation at a time; all
/// cross-invocation state lives in the files under `Config::home`.
pub struct Session {
    config: Config,
    client: Option<Client>,
    notifier: Box<dyn Notifier + Send + Sync>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let client = Self::read_credentials(&config)
            .and_then(|credentials| Client::new(credentials).ok());
        Session {
            config,
            client,
            notifier: Box::new(Silent),
        }
    }
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier + Send + Sync>) -> Self {
        self.notifier = notifier;
        self
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn read_credentials(config: &Config) -> Option<Credentials> {
        let raw = fs::read_to_string(config.session_file()).ok()?;
        let credentials: Credentials = serde_json::from_str(&raw).ok()?;
        if credentials.is_complete() {
            Some(credentials)
        } else {
            None
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.client.is_some()
    }
    fn client(&self) -> Result<&Client> {
        self.client
            .as_ref()
            .ok_or_else(|| Error::with_kind(Kind::Auth))
    }

    /// Persist browser-captured credentials and rebuild the client.
    pub fn login(&mut self, endpoint: &str, csrftoken: String, session: String) -> Result<()> {
        let credentials = Credentials {
            endpoint: Endpoint::from_selector(endpoint),
            csrftoken,
            leetcode_session: session,
        };
        if !credentials.is_complete() {
            return Err(Error::with_kind(Kind::Auth));
        }
        fs::write(
            self.config.session_file(),
            serde_json::to_string(&credentials)?,
        )?;
        self.client = Some(Client::new(credentials)?);
        Ok(())
    }

    /// Materializes the catalogue buffer file, sorted ascending by id, with
    /// solved entries marked. A malformed cached catalogue is a fatal decode
    /// error, never silently refetched.
    pub async fn list_problems(
        &self,
        category: &str,
        use_cache: bool,
    ) -> Result<(PathBuf, String)> {
        let cache = self.config.problems_file();
        let raw = if use_cache && cache.exists() {
            fs::read_to_string(&cache)?
        } else {
            let raw = self.client()?.fetch_catalogue(category).await?;
            fs::write(&cache, &raw)?;
            raw
        };
        let catalogue: catalog::Catalogue = serde_json::from_str(&raw)?;
        let solved = solved::SolvedSet::load(&self.config.aclist_file())?;
        let rendered = catalog::render(&catalog::records(catalogue, &solved));
        let out = self.config.problems_tmp_file();
        fs::write(&out, rendered)?;
        Ok((out, String::from("All problems loaded!")))
    }

    /// Card titles for an explore category, into the same buffer file.
    pub async fn list_cards(&self, category: &str) -> Result<(PathBuf, String)> {
        let payload = self.client()?.fetch_categories().await?;
        let mut titles: Vec<String> = Vec::new();
        if let Some(categories) = payload["data"]["categories"].as_array() {
            for entry in categories {
                if entry["slug"].as_str() != Some(category) {
                    continue;
                }
                if let Some(cards) = entry["cards"].as_array() {
                    titles.extend(
                        cards
                            .iter()
                            .filter_map(|c| c["title"].as_str().map(str::to_owned)),
                    );
                }
            }
        }
        let out = self.config.problems_tmp_file();
        fs::write(&out, titles.join("\n"))?;
        Ok((out, String::from("All cards loaded!")))
    }

    pub async fn fetch_progress(&self) -> Result<Value> {
        self.client()?.fetch_progress().await
    }

    /// Question payload, cached per problem under `problems/<compact>.json`.
    async fn question(&self, id: u64, title_slug: &str) -> Result<Question> {
        let path = self.config.question_cache(&compact_name(id, title_slug));
        let raw = if path.exists() {
            fs::read_to_string(&path)?
        } else {
            let raw = self.client()?.fetch_question(title_slug).await?;
            fs::write(&path, &raw)?;
            raw
        };
        let parsed: crate::judge::response::QuestionData = serde_json::from_str(&raw)?;
        Ok(parsed.data.question)
    }

    fn solution_path(&self, id: u64, title_slug: &str, lang_slug: &str) -> Result<PathBuf> {
        let ext = lang::extension(lang_slug)
            .ok_or_else(|| not_found(format!("Unknown language {}!", lang_slug)))?;
        let file_name = format!("{}{}", compact_name(id, title_slug), ext);
        Ok(self.config.solution_file(lang_slug, &file_name))
    }

    /// Idempotent when the file exists and the cache is honored: repeated
    /// calls never overwrite user edits. `use_cache == false` resets the
    /// file from the remote starter snippet.
    pub async fn open_solution(
        &self,
        id: u64,
        title_slug: &str,
        lang_slug: &str,
        use_cache: bool,
    ) -> Result<(PathBuf, String)> {
        let path = self.solution_path(id, title_slug, lang_slug)?;
        let greeting = String::from("Happy coding! ^_^");
        if use_cache && path.exists() {
            return Ok((path, greeting));
        }
        let question = self.question(id, title_slug).await?;
        if question.accepted() {
            solved::mark(&self.config.aclist_file(), id)?;
        }
        let snippet = question
            .snippet(lang_slug)
            .ok_or_else(|| not_found(format!("No code snippet for {} found!", lang_slug)))?;
        let comment = lang::comment(lang_slug)
            .ok_or_else(|| not_found(format!("Unknown language {}!", lang_slug)))?;
        let description = text::html_to_text(question.content.as_deref().unwrap_or_default());
        let rendered = solution::render(&description, &snippet.code, comment);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, rendered)?;
        Ok((path, greeting))
    }

    /// Runs the solution against the sample (or provided) input and renders
    /// a correctness report.
    pub async fn run_sample(
        &self,
        id: u64,
        title_slug: &str,
        lang_slug: &str,
        test_input: Option<&str>,
    ) -> Result<String> {
        let path = self.solution_path(id, title_slug, lang_slug)?;
        let code = solution::extract_code(&fs::read_to_string(&path)?)?;
        let tests = match test_input {
            Some(t) if !t.trim().is_empty() => t.to_owned(),
            _ => self
                .question(id, title_slug)
                .await?
                .sample_test_case
                .ok_or_else(|| not_found("No sample input stored for this problem!"))?,
        };
        let payload = self
            .client()?
            .run_interpret(id, title_slug, lang_slug, &code, &tests)
            .await?;
        report::run_report(&payload, &tests)
    }

    pub async fn submit(&self, id: u64, title_slug: &str, lang_slug: &str) -> Result<String> {
        let path = self.solution_path(id, title_slug, lang_slug)?;
        let code = solution::extract_code(&fs::read_to_string(&path)?)?;
        let payload = self
            .client()?
            .run_submit(id, title_slug, lang_slug, &code)
            .await?;
        self.finish_submit(id, lang_slug, &path, &payload)
    }

    /// Side effects of a finished submission, separated from the network
    /// call: mark the solved set on acceptance, mirror the file into the
    /// solution repository (best effort), emit the notification.
    pub fn finish_submit(
        &self,
        id: u64,
        lang_slug: &str,
        path: &std::path::Path,
        payload: &Value,
    ) -> Result<String> {
        if report::accepted(payload) {
            solved::mark(&self.config.aclist_file(), id)?;
            self.mirror_solution(lang_slug, path);
            self.notifier.notify(Event::Accepted);
        }
        report::submit_report(payload)
    }

    /// Copy failures must never mask the accepted result.
    fn mirror_solution(&self, lang_slug: &str, path: &std::path::Path) {
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_owned(),
            None => return,
        };
        if let Some(dest) = self.config.repo_solution_file(lang_slug, &file_name) {
            let copy = || -> std::io::Result<()> {
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)?;
                Ok(())
            };
            if let Err(e) = copy() {
                warn!("failed to mirror {} into repository: {}", file_name, e);
            }
        }
    }

    /// Splices the latest accepted remote code between the sentinels. A
    /// failed remote lookup degrades to a message, it never propagates.
    pub async fn fetch_latest_submission(
        &self,
        id: u64,
        title_slug: &str,
        lang_slug: &str,
    ) -> Result<(PathBuf, String)> {
        let (path, _) = self.open_solution(id, title_slug, lang_slug, true).await?;
        let content = fs::read_to_string(&path)?;
        match self
            .client()?
            .fetch_latest_submission(id, title_slug, lang_slug)
            .await
        {
            Ok(code) => {
                fs::write(&path, solution::splice_code(&content, &code)?)?;
                Ok((path, String::from("Latest submission is retrieved!")))
            }
            Err(e) => {
                warn!("latest submission lookup failed: {}", e);
                Ok((path, String::from("No code found!")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::{
        env,
        sync::atomic::{AtomicUsize, Ordering},
        sync::Arc,
    };

    struct Recording(Arc<AtomicUsize>);
    impl Notifier for Recording {
        fn notify(&self, event: Event) {
            if event == Event::Accepted {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn workspace(name: &str) -> Session {
        let home = env::temp_dir().join("lc-workspace-session-tests").join(name);
        let _ = fs::remove_dir_all(&home);
        let config = Config::with_home(home);
        fs::create_dir_all(config.problems_home()).unwrap();
        fs::create_dir_all(config.solutions_home()).unwrap();
        Session::new(config)
    }

    fn question_payload() -> String {
        json!({
            "data": { "question": {
                "title": "Two Sum",
                "titleSlug": "two-sum",
                "content": "<p>Given an array.</p>",
                "difficulty": "Easy",
                "codeSnippets": [
                    { "lang": "Java", "langSlug": "java", "code": "class Solution {\n}" },
                ],
                "status": null,
                "sampleTestCase": "[2,7,11,15]\n9",
            }},
        })
        .to_string()
    }

    #[tokio::test]
    async fn open_solution_builds_file_from_cached_question() {
        let session = workspace("open");
        fs::write(
            session.config().question_cache("no-0001-two-sum"),
            question_payload(),
        )
        .unwrap();
        let (path, msg) = session
            .open_solution(1, "two-sum", "java", true)
            .await
            .unwrap();
        assert_eq!(msg, "Happy coding! ^_^");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("// @desc-start"));
        assert!(content.contains("// Given an array."));
        assert_eq!(
            solution::extract_code(&content).unwrap(),
            "class Solution {\n}"
        );
    }

    #[tokio::test]
    async fn open_solution_is_idempotent_with_cache() {
        let session = workspace("idempotent");
        fs::write(
            session.config().question_cache("no-0001-two-sum"),
            question_payload(),
        )
        .unwrap();
        let (path, _) = session
            .open_solution(1, "two-sum", "java", true)
            .await
            .unwrap();
        let edited = "// @desc-start\n// @desc-end\n\n\n// @code-start\nmy edits\n// @code-end";
        fs::write(&path, edited).unwrap();
        // No client is configured, so a second call that hit the network
        // would fail rather than pass.
        let (again, _) = session
            .open_solution(1, "two-sum", "java", true)
            .await
            .unwrap();
        assert_eq!(again, path);
        assert_eq!(fs::read_to_string(&again).unwrap(), edited);
    }

    #[tokio::test]
    async fn open_solution_without_snippet_is_not_found() {
        let session = workspace("nosnippet");
        fs::write(
            session.config().question_cache("no-0001-two-sum"),
            question_payload(),
        )
        .unwrap();
        let err = session
            .open_solution(1, "two-sum", "rust", true)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No code snippet for rust found!");
    }

    #[tokio::test]
    async fn remotely_accepted_question_marks_solved_set() {
        let session = workspace("remote-ac");
        let payload = question_payload().replace("null", "\"ac\"");
        fs::write(session.config().question_cache("no-0001-two-sum"), payload).unwrap();
        session
            .open_solution(1, "two-sum", "java", true)
            .await
            .unwrap();
        let set = solved::SolvedSet::load(&session.config().aclist_file()).unwrap();
        assert!(set.contains(1));
    }

    #[test]
    fn accepted_submission_marks_set_mirrors_file_and_notifies() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut session = workspace("accepted");
        let repo = session.config.home.join("repo");
        session.config.repo_path = Some(repo.clone());
        let session = session.with_notifier(Box::new(Recording(hits.clone())));

        let path = session.config().solution_file("java", "no-0001-two-sum.java");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "// @code-start\ncode\n// @code-end").unwrap();

        let payload = json!({
            "run_success": true,
            "total_correct": 17,
            "total_testcases": 17,
        });
        let msg = session.finish_submit(1, "java", &path, &payload).unwrap();
        assert!(msg.starts_with("Accepted\nTestcases:\n17/17"));
        let set = solved::SolvedSet::load(&session.config().aclist_file()).unwrap();
        assert!(set.contains(1));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        let mirrored = repo.join("solutions/java/no-0001-two-sum.java");
        assert!(mirrored.exists());
    }

    #[test]
    fn rejected_submission_has_no_side_effects() {
        let session = workspace("rejected");
        let path = session.config().solution_file("java", "no-0002-x.java");
        let payload = json!({
            "run_success": true,
            "total_correct": 3,
            "total_testcases": 17,
            "input_formatted": "[1]",
            "expected_output": "[2]",
            "code_output": "[3]",
        });
        let msg = session.finish_submit(2, "java", &path, &payload).unwrap();
        assert!(msg.starts_with("Wrong Answer"));
        let set = solved::SolvedSet::load(&session.config().aclist_file()).unwrap();
        assert!(!set.contains(2));
    }

    #[tokio::test]
    async fn operations_without_login_fail_with_auth() {
        let session = workspace("auth");
        let err = session.list_problems("all", false).await.unwrap_err();
        assert!(matches!(err.kind(), Kind::Auth));
    }

    #[tokio::test]
    async fn malformed_cached_catalogue_is_a_decode_error() {
        let session = workspace("badcache");
        fs::write(session.config().problems_file(), "{not json").unwrap();
        let err = session.list_problems("all", true).await.unwrap_err();
        assert!(matches!(err.kind(), Kind::Decode(_)));
    }

    #[tokio::test]
    async fn catalogue_rebuild_from_cache_sorts_and_marks() {
        let session = workspace("catalogue");
        let raw = json!({ "stat_status_pairs": [
            { "stat": { "question_id": 5, "question__title": "E", "question__title_slug": "e" },
              "difficulty": { "level": 1 } },
            { "stat": { "question_id": 1, "question__title": "A", "question__title_slug": "a" },
              "difficulty": { "level": 2 } },
            { "stat": { "question_id": 3, "question__title": "C", "question__title_slug": "c" },
              "difficulty": { "level": 3 } },
        ]});
        fs::write(session.config().problems_file(), raw.to_string()).unwrap();
        solved::mark(&session.config().aclist_file(), 3).unwrap();
        let (path, msg) = session.list_problems("all", true).await.unwrap();
        assert_eq!(msg, "All problems loaded!");
        let rendered = fs::read_to_string(path).unwrap();
        let ids: Vec<&str> = rendered
            .lines()
            .map(|l| &l[..8])
            .collect();
        assert_eq!(ids, vec!["No. 0001", "No. 0003", "No. 0005"]);
        assert!(rendered.lines().nth(1).unwrap().contains("___status=ac___"));
    }
}
