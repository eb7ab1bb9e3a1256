pub mod palette;
pub mod progress;
pub mod record;
pub mod report;

use crate::config::default::{COMMUNITY_SCORE_DENOMINATOR, CONTENT_TAGS};
use crate::scan::{is_flagged_verdict, ScanReport, ScanState};

/// Convert a string into a tree label.
fn tree_label<S: Into<String>>(s: S) -> String {
    s.into()
}

/// One independent section of a rendered scan state.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderBlock {
    Error { message: String },
    Summary(Summary),
    Engines(Vec<EngineRow>),
}

/// Community score readout and verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub url: String,
    pub malicious: Option<u64>,
    pub denominator: u32,
    pub safe: bool,
    pub tags: Vec<&'static str>,
    /// Optional counters reported by the service, in display order
    pub stats: Vec<(&'static str, String)>,
    pub scanned_at: String,
}

impl Summary {
    pub fn score_text(&self) -> String {
        match self.malicious {
            Some(n) => format!("{} / {}", n, self.denominator),
            None => format!("- / {}", self.denominator),
        }
    }

    pub fn verdict_text(&self) -> &'static str {
        if self.safe {
            "No security vendors flagged this URL as malicious"
        } else {
            "Some engines flagged this URL as malicious"
        }
    }
}

/// One row of the engine table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineRow {
    pub engine: String,
    pub verdict: String,
    pub flagged: bool,
}

/// Map a scan state onto the blocks to render.
///
/// An error state renders only its message. A success renders every block
/// the report satisfies, in order: upstream error, summary, engine table.
pub fn build_blocks(state: &ScanState) -> Vec<RenderBlock> {
    match state {
        ScanState::Idle | ScanState::Pending { .. } => Vec::new(),
        ScanState::Error { message, .. } => vec![RenderBlock::Error {
            message: message.clone(),
        }],
        ScanState::Success {
            url,
            report,
            scanned_at,
        } => report_blocks(url, report, &scanned_at.format("%H:%M:%S").to_string()),
    }
}

fn report_blocks(url: &str, report: &ScanReport, scanned_at: &str) -> Vec<RenderBlock> {
    let mut blocks = Vec::new();
    if let Some(message) = report.error_message() {
        blocks.push(RenderBlock::Error {
            message: message.to_string(),
        });
    }
    if report.verdict_status().is_some() {
        let mut stats = Vec::new();
        if let Some(n) = report.harmless {
            stats.push(("harmless", n.to_string()));
        }
        if let Some(n) = report.suspicious {
            stats.push(("suspicious", n.to_string()));
        }
        if let Some(n) = report.total {
            stats.push(("engines", n.to_string()));
        }
        if let Some(n) = report.community_score {
            stats.push(("community votes", n.to_string()));
        }
        blocks.push(RenderBlock::Summary(Summary {
            url: url.to_string(),
            malicious: report.malicious,
            denominator: COMMUNITY_SCORE_DENOMINATOR,
            safe: report.is_safe(),
            tags: CONTENT_TAGS.to_vec(),
            stats,
            scanned_at: scanned_at.to_string(),
        }));
    }
    if let Some(results) = &report.engine_results {
        let rows = results
            .iter()
            .map(|(engine, verdict)| EngineRow {
                engine: engine.clone(),
                verdict: verdict.clone(),
                flagged: is_flagged_verdict(verdict),
            })
            .collect();
        blocks.push(RenderBlock::Engines(rows));
    }
    blocks
}
