extern crate serde;

use crate::{
    line::{Level, Record},
    solved::SolvedSet,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Catalogue {
    #[serde(rename = "stat_status_pairs")]
    pub problems: Vec<Entry>,
}
#[derive(Deserialize)]
pub struct Entry {
    pub stat: Stat,
    pub difficulty: Difficulty,
}
#[derive(Deserialize)]
pub struct Stat {
    #[serde(rename = "question_id")]
    pub id: u64,
    #[serde(rename = "question__title")]
    pub title: String,
    #[serde(rename = "question__title_slug")]
    pub title_slug: String,
}
#[derive(Deserialize)]
pub struct Difficulty {
    pub level: u8,
}

/// Records sorted by ascending id regardless of remote order, with solved
/// entries marked from the local set.
pub fn records(catalogue: Catalogue, solved: &SolvedSet) -> Vec<Record> {
    let mut records: Vec<Record> = catalogue
        .problems
        .into_iter()
        .map(|entry| Record {
            solved: solved.contains(entry.stat.id),
            id: entry.stat.id,
            title: entry.stat.title,
            title_slug: entry.stat.title_slug,
            level: Level::from_index(entry.difficulty.level),
        })
        .collect();
    records.sort_by_key(|r| r.id);
    records
}

pub fn render(records: &[Record]) -> String {
    let lines: Vec<String> = records.iter().map(Record::encode).collect();
    lines.join("\n")
}
