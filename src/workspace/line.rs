extern crate regex;

use crate::lang;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}
impl Level {
    pub fn from_index(index: u8) -> Self {
        match index {
            2 => Level::Medium,
            3 => Level::Hard,
            _ => Level::Easy,
        }
    }
    pub fn index(self) -> u8 {
        match self {
            Level::Easy => 1,
            Level::Medium => 2,
            Level::Hard => 3,
        }
    }
    pub fn marker(self) -> &'static str {
        match self {
            Level::Easy => "<E>",
            Level::Medium => "<M>",
            Level::Hard => "<H>",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub title: String,
    pub title_slug: String,
    pub level: Level,
    pub solved: bool,
}

pub fn compact_name(id: u64, title_slug: &str) -> String {
    format!("no-{:04}-{}", id, title_slug)
}

impl Record {
    /// One catalogue buffer line: a readable prefix followed by the
    /// machine-readable attribute block.
    pub fn encode(&self) -> String {
        let mut items = vec![
            format!("No. {:04} {} {}", self.id, self.level.marker(), self.title),
            String::from("{{{"),
        ];
        items.push(format!("___question_id={}___", self.id));
        items.push(format!("___title_slug={}___", self.title_slug));
        items.push(format!("___level={}___", self.level.index()));
        if self.solved {
            items.push(String::from("___status=ac___"));
        }
        items.push(String::from("}}}"));
        items.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRef {
    pub id: u64,
    pub title_slug: String,
    pub lang: Option<&'static str>,
}

pub trait LineParser {
    fn try_parse(&self, line: &str) -> Option<ProblemRef>;
}

/// Attribute-block form, e.g.
/// `No. 0001 <E> Two Sum {{{ ___question_id=1___ ___title_slug=two-sum___ ___level=1___ }}}`.
pub struct RichLine {
    attr: Regex,
}
impl RichLine {
    pub fn new() -> Self {
        RichLine {
            attr: Regex::new("___([a-zA-Z0-9-_=]+)___").unwrap(),
        }
    }
}
impl LineParser for RichLine {
    fn try_parse(&self, line: &str) -> Option<ProblemRef> {
        if !line.contains("{{{") {
            return None;
        }
        let mut id = None;
        let mut slug = None;
        for cap in self.attr.captures_iter(line) {
            let attr = cap.get(1).unwrap().as_str();
            let mut split = attr.splitn(2, '=');
            match (split.next(), split.next()) {
                (Some("question_id"), Some(v)) => id = v.parse::<u64>().ok(),
                (Some("title_slug"), Some(v)) => slug = Some(v.to_owned()),
                _ => {}
            }
        }
        Some(ProblemRef {
            id: id?,
            title_slug: slug?,
            lang: None,
        })
    }
}

/// Compact filename form, e.g. `no-0001-two-sum.java`.
pub struct CompactName {
    pattern: Regex,
}
impl CompactName {
    pub fn new() -> Self {
        CompactName {
            pattern: Regex::new(r"no-(\d+)-(.+)\.([a-z]+)").unwrap(),
        }
    }
}
impl LineParser for CompactName {
    fn try_parse(&self, line: &str) -> Option<ProblemRef> {
        let cap = self.pattern.captures(line)?;
        Some(ProblemRef {
            id: cap.get(1).unwrap().as_str().parse::<u64>().ok()?,
            title_slug: cap.get(2).unwrap().as_str().to_owned(),
            lang: lang::from_extension(cap.get(3).unwrap().as_str()),
        })
    }
}

/// Parsers tried in a fixed priority order; a line matching none of them
/// carries no identifying data, which callers treat as expected.
pub struct Decoder {
    parsers: Vec<Box<dyn LineParser + Send + Sync>>,
}
impl Decoder {
    pub fn new() -> Self {
        Decoder {
            parsers: vec![Box::new(RichLine::new()), Box::new(CompactName::new())],
        }
    }
    pub fn decode(&self, line: &str) -> Option<ProblemRef> {
        self.parsers.iter().find_map(|p| p.try_parse(line))
    }
}
impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
