use std::fmt::Write;

use literature_query::{QueryPhase, QueryResult};

pub const IDLE_HINT: &str = "Describe your symptoms to search the medical literature.";
pub const SEARCHING: &str = "Searching the literature...";

/// Text rendering of the current phase. Pure function of its argument.
pub fn render(phase: &QueryPhase) -> String {
    match phase {
        QueryPhase::Idle => IDLE_HINT.to_string(),
        QueryPhase::Submitting { .. } => SEARCHING.to_string(),
        QueryPhase::Success(result) => render_result(result),
        QueryPhase::Error(message) => format!("error: {}", message),
    }
}

fn render_result(result: &QueryResult) -> String {
    let mut out = String::new();
    out.push_str(&result.summary);
    out.push('\n');

    if result.matches.is_empty() {
        out.push_str("\nNo matching articles found.\n");
    } else {
        out.push_str("\nMatching articles:\n");
        for (index, m) in result.matches.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {} ({}, {}) [{}]\n   {}\n   {}",
                index + 1,
                m.title,
                m.journal,
                m.year,
                m.source,
                m.snippet,
                m.url
            );
        }
    }

    if !result.citations.is_empty() {
        out.push_str("\nReferences:\n");
        for (index, citation) in result.citations.iter().enumerate() {
            let _ = writeln!(out, "[{}] {}", index + 1, citation);
        }
    }

    out
}
