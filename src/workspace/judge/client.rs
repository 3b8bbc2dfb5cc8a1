extern crate log;
extern crate reqwest;
extern crate serde;
extern crate serde_json;

use super::{
    poll::{self, State},
    response::QuestionData,
};
use crate::{
    config::poll as poll_config,
    error::{Error, Kind, Result},
};
use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, COOKIE, HOST, REFERER},
    Response, StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const FIREFOX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:78.0) Gecko/20100101 Firefox/78.0";

const QUESTION_QUERY: &str = "query questionData($titleSlug: String!) {\
  question(titleSlug: $titleSlug) {\
    title titleSlug content isPaidOnly difficulty \
    codeSnippets { lang langSlug code } \
    hints status sampleTestCase \
  }\
}";
const CATEGORIES_QUERY: &str = "query GetCategories($categorySlug: String, $num: Int) {\
  categories(slug: $categorySlug) {\
    id title slug \
    cards(num: $num) { id title slug categorySlug paidOnly published } \
  }\
}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Us,
    Cn,
}
impl Endpoint {
    pub fn from_selector(selector: &str) -> Self {
        if selector.eq_ignore_ascii_case("cn") {
            Endpoint::Cn
        } else {
            Endpoint::Us
        }
    }
    pub fn host(self) -> &'static str {
        match self {
            Endpoint::Us => "leetcode.com",
            Endpoint::Cn => "leetcode-cn.com",
        }
    }
}

/// Captured from an authenticated browser session; persisted as
/// `session.json`. Presence of all fields is the sole login predicate, no
/// freshness check is performed locally.
#[derive(Serialize, Deserialize)]
pub struct Credentials {
    pub endpoint: Endpoint,
    pub csrftoken: String,
    pub leetcode_session: String,
}
impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.csrftoken.is_empty() && !self.leetcode_session.is_empty()
    }
}

pub struct Client {
    http: reqwest::Client,
    credentials: Credentials,
}

impl Client {
    pub fn new(credentials: Credentials) -> Result<Self> {
        Ok(Client {
            http: reqwest::Client::builder()
                .user_agent(FIREFOX_UA)
                .build()
                .map_err(|e| Error::with_kind(Kind::Network(e)))?,
            credentials,
        })
    }

    fn host(&self) -> &'static str {
        self.credentials.endpoint.host()
    }
    fn url(&self, path: &str) -> String {
        format!("https://{}{}", self.host(), path)
    }
    fn problem_referer(&self, title_slug: &str) -> String {
        format!("https://{}/problems/{}/", self.host(), title_slug)
    }

    fn cookie_string(&self) -> String {
        format!(
            "csrftoken={};LEETCODE_SESSION={};",
            self.credentials.csrftoken, self.credentials.leetcode_session
        )
    }
    fn headers(&self, referer: Option<&str>) -> Result<HeaderMap> {
        let value = |v: &str| {
            HeaderValue::from_str(v).map_err(|_| {
                Error::with_description(Kind::Auth, "session token contains invalid characters")
            })
        };
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static(self.host()));
        headers.insert(COOKIE, value(&self.cookie_string())?);
        headers.insert(
            HeaderName::from_static("x-csrftoken"),
            value(&self.credentials.csrftoken)?,
        );
        headers.insert(
            HeaderName::from_static("x-requested-with"),
            HeaderValue::from_static("XMLHttpRequest"),
        );
        if let Some(r) = referer {
            headers.insert(REFERER, value(r)?);
        }
        Ok(headers)
    }

    /// Any status other than 200 is a hard failure for the call.
    fn check(response: Response) -> Result<Response> {
        if response.status() == StatusCode::OK {
            Ok(response)
        } else {
            Err(Error::with_kind(Kind::Request(Some(response.status()))))
        }
    }

    async fn get(&self, url: &str, referer: Option<&str>) -> Result<Response> {
        debug!("GET {}", url);
        Self::check(
            self.http
                .get(url)
                .headers(self.headers(referer)?)
                .send()
                .await?,
        )
    }
    async fn get_json(&self, url: &str, referer: Option<&str>) -> Result<Value> {
        Ok(self.get(url, referer).await?.json::<Value>().await?)
    }
    async fn post(&self, url: &str, referer: Option<&str>, body: &Value) -> Result<Response> {
        debug!("POST {}", url);
        Self::check(
            self.http
                .post(url)
                .headers(self.headers(referer)?)
                .json(body)
                .send()
                .await?,
        )
    }

    /// Raw catalogue listing; the caller persists the response text as the
    /// local cache.
    pub async fn fetch_catalogue(&self, category: &str) -> Result<String> {
        let url = self.url(&format!("/api/problems/{}", category));
        Ok(self.get(&url, None).await?.text().await?)
    }

    /// Raw `questionData` response text, cached per problem by the caller.
    pub async fn fetch_question(&self, title_slug: &str) -> Result<String> {
        let referer = self.problem_referer(title_slug);
        let body = json!({
            "operationName": "questionData",
            "variables": { "titleSlug": title_slug },
            "query": QUESTION_QUERY,
        });
        let text = self
            .post(&self.url("/graphql"), Some(referer.as_str()), &body)
            .await?
            .text()
            .await?;
        // Catch malformed payloads here rather than at every cache read.
        let _: QuestionData = serde_json::from_str(&text)?;
        Ok(text)
    }

    pub async fn fetch_categories(&self) -> Result<Value> {
        let referer = self.url("/explore/");
        let body = json!({
            "operationName": "GetCategories",
            "variables": { "num": 8 },
            "query": CATEGORIES_QUERY,
        });
        Ok(self
            .post(&self.url("/graphql"), Some(referer.as_str()), &body)
            .await?
            .json::<Value>()
            .await?)
    }

    pub async fn fetch_progress(&self) -> Result<Value> {
        self.get_json(&self.url("/api/progress/all/"), None).await
    }

    /// Most recent remote submission for the problem and language.
    pub async fn fetch_latest_submission(
        &self,
        problem_id: u64,
        title_slug: &str,
        lang: &str,
    ) -> Result<String> {
        let referer = self.problem_referer(title_slug);
        let url = format!(
            "{}?qid={}&lang={}",
            self.url("/submissions/latest/"),
            problem_id,
            lang
        );
        let payload = self.get_json(&url, Some(referer.as_str())).await?;
        payload
            .get("code")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| crate::error::not_found("No code found!"))
    }

    /// Two-phase run: POST the code, then poll the check endpoint at a
    /// fixed cadence until the judge reports a terminal state.
    async fn upload(
        &self,
        path: String,
        referer: String,
        run_id_key: &str,
        body: Value,
    ) -> Result<Value> {
        let posted = self.post(&self.url(&path), Some(referer.as_str()), &body)
            .await?
            .json::<Value>()
            .await?;
        let run_id = match posted.get(run_id_key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(Error::with_description(
                    Kind::Request(None),
                    format!("response carries no {}", run_id_key),
                ))
            }
        };
        let check_url = self.url(&format!("/submissions/detail/{}/check/", run_id));
        debug!("polling {}", check_url);
        let state = poll::drive(
            || self.get_json(&check_url, Some(referer.as_str())),
            poll_config::DELAY,
            poll_config::ROUNDS,
        )
        .await?;
        match state {
            State::Succeeded(payload) | State::Failed(payload) => Ok(payload),
            _ => Err(Error::with_kind(Kind::Timeout)),
        }
    }

    pub async fn run_interpret(
        &self,
        problem_id: u64,
        title_slug: &str,
        lang: &str,
        code: &str,
        test_input: &str,
    ) -> Result<Value> {
        self.upload(
            format!("/problems/{}/interpret_solution/", title_slug),
            self.problem_referer(title_slug),
            "interpret_id",
            json!({
                "data_input": test_input,
                "judge_type": "large",
                "lang": lang,
                "question_id": problem_id,
                "typed_code": code,
            }),
        )
        .await
    }

    pub async fn run_submit(
        &self,
        problem_id: u64,
        title_slug: &str,
        lang: &str,
        code: &str,
    ) -> Result<Value> {
        self.upload(
            format!("/problems/{}/submit/", title_slug),
            self.problem_referer(title_slug),
            "submission_id",
            json!({
                "lang": lang,
                "question_id": problem_id,
                "typed_code": code,
            }),
        )
        .await
    }
}
