//! Fixed category lookup tables for fallback resource links.
//!
//! Matching is case-insensitive substring matching against the subject;
//! the first matching category wins, and an unmatched subject falls back
//! to the declared default. Only the fallback synthesis path uses these.

use crate::plan::PlanRequest;
use url::form_urlencoded;

type CategoryTable = &'static [(&'static [&'static str], &'static str)];

const DOCUMENTATION_CATEGORIES: CategoryTable = &[
    (&["react", "javascript", "js"], "https://react.dev/learn"),
    (&["python"], "https://docs.python.org/3/tutorial/"),
    (&["java"], "https://docs.oracle.com/javase/tutorial/"),
    (&["node", "nodejs"], "https://nodejs.org/docs/"),
    (&["typescript", "ts"], "https://www.typescriptlang.org/docs/"),
    (&["html"], "https://developer.mozilla.org/en-US/docs/Web/HTML"),
    (&["css"], "https://developer.mozilla.org/en-US/docs/Web/CSS"),
    (&["sql", "database"], "https://www.w3schools.com/sql/"),
    (&["git"], "https://git-scm.com/doc"),
    (&["docker"], "https://docs.docker.com/"),
    (&["aws", "cloud"], "https://docs.aws.amazon.com/"),
];

const DEFAULT_DOCUMENTATION: &str = "https://developer.mozilla.org/en-US/docs/Web/JavaScript";

const EXERCISE_CATEGORIES: CategoryTable = &[
    (
        &["javascript", "js", "react", "node"],
        "https://leetcode.com/problemset/all/",
    ),
    (&["python"], "https://www.hackerrank.com/domains/python"),
    (&["java"], "https://www.hackerrank.com/domains/java"),
    (&["sql", "database"], "https://www.hackerrank.com/domains/sql"),
    (
        &["algorithm", "data structure"],
        "https://leetcode.com/problemset/all/",
    ),
    (&["html", "css", "web"], "https://www.freecodecamp.org/"),
    (&["machine learning", "ml", "ai"], "https://www.kaggle.com/learn"),
];

const DEFAULT_EXERCISES: &str = "https://leetcode.com/problemset/all/";

fn lookup(subject: &str, table: CategoryTable, default: &'static str) -> &'static str {
    let subject = subject.to_lowercase();
    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| subject.contains(k)))
        .map(|(_, link)| *link)
        .unwrap_or(default)
}

/// Canonical documentation URL for a subject.
pub fn documentation_for(subject: &str) -> &'static str {
    lookup(subject, DOCUMENTATION_CATEGORIES, DEFAULT_DOCUMENTATION)
}

/// Canonical practice-exercise URL for a subject.
pub fn exercises_for(subject: &str) -> &'static str {
    lookup(subject, EXERCISE_CATEGORIES, DEFAULT_EXERCISES)
}

/// YouTube search URL over the subject (and subtopic when present).
pub fn video_search_url(request: &PlanRequest) -> String {
    let query = match request.sub_topic() {
        Some(topic) => format!("{} {} tutorial", request.subject(), topic),
        None => format!("{} tutorial", request.subject()),
    };
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("https://www.youtube.com/results?search_query={encoded}")
}
