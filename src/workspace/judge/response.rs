extern crate serde;

use serde::Deserialize;

/// GraphQL `questionData` envelope.
#[derive(Deserialize)]
pub struct QuestionData {
    pub data: QuestionNode,
}
#[derive(Deserialize)]
pub struct QuestionNode {
    pub question: Question,
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub title: String,
    pub title_slug: String,
    pub content: Option<String>,
    pub difficulty: Option<String>,
    #[serde(default)]
    pub code_snippets: Vec<Snippet>,
    pub status: Option<String>,
    pub sample_test_case: Option<String>,
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub lang: String,
    pub lang_slug: String,
    pub code: String,
}

impl Question {
    pub fn snippet(&self, lang: &str) -> Option<&Snippet> {
        self.code_snippets.iter().find(|s| s.lang_slug == lang)
    }
    pub fn accepted(&self) -> bool {
        self.status.as_deref() == Some("ac")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn question_payload_decodes() {
        let raw = json!({
            "data": { "question": {
                "title": "Two Sum",
                "titleSlug": "two-sum",
                "content": "<p>Given</p>",
                "difficulty": "Easy",
                "codeSnippets": [
                    { "lang": "Java", "langSlug": "java", "code": "class Solution {}" },
                ],
                "status": "ac",
                "sampleTestCase": "[2,7,11,15]\n9",
            }},
        });
        let parsed: QuestionData = serde_json::from_value(raw).unwrap();
        let q = parsed.data.question;
        assert!(q.accepted());
        assert_eq!(q.snippet("java").unwrap().code, "class Solution {}");
        assert!(q.snippet("rust").is_none());
    }
}
