use crossterm::style::Stylize;
use termtree::Tree;

use crate::scan::ScanState;

use super::{build_blocks, palette::Palette, tree_label, RenderBlock};

/// Build the result tree for a scan state. Returns None when there is nothing to show.
pub fn build_result_tree(state: &ScanState, palette: &Palette) -> Option<Tree<String>> {
    let blocks = build_blocks(state);
    if blocks.is_empty() {
        return None;
    }
    let title = match state.submitted_url() {
        Some(url) => format!("Scan result: {}", url),
        None => "Scan result".to_string(),
    };
    let mut root = Tree::new(tree_label(title.with(palette.title).bold().to_string()));

    for block in blocks {
        match block {
            RenderBlock::Error { message } => {
                root.push(Tree::new(tree_label(
                    format!("error: {}", message).with(palette.error).to_string(),
                )));
            }
            RenderBlock::Summary(summary) => {
                let mut node = Tree::new(tree_label("Community Score"));
                node.push(Tree::new(tree_label(
                    summary.score_text().with(palette.score).bold().to_string(),
                )));
                node.push(Tree::new(tree_label(
                    summary
                        .verdict_text()
                        .with(palette.status(summary.safe))
                        .to_string(),
                )));
                node.push(Tree::new(tree_label(format!("url: {}", summary.url))));
                node.push(Tree::new(tree_label(format!(
                    "tags: {}",
                    summary.tags.join(", ")
                ))));
                for (name, value) in &summary.stats {
                    node.push(Tree::new(tree_label(format!("{}: {}", name, value))));
                }
                node.push(Tree::new(tree_label(
                    format!("last scan: {}", summary.scanned_at)
                        .with(palette.muted)
                        .to_string(),
                )));
                root.push(node);
            }
            RenderBlock::Engines(rows) => {
                let flagged = rows.iter().filter(|r| r.flagged).count();
                let mut node = Tree::new(tree_label(format!(
                    "Engines ({} flagged / {})",
                    flagged,
                    rows.len()
                )));
                for row in &rows {
                    let verdict = if row.flagged {
                        row.verdict.as_str().with(palette.verdict(row)).bold()
                    } else {
                        row.verdict.as_str().with(palette.verdict(row))
                    };
                    node.push(Tree::new(tree_label(format!("{}: {}", row.engine, verdict))));
                }
                root.push(node);
            }
        }
    }
    Some(root)
}

/// Print the result of a scan in a tree structure.
pub fn print_result_tree(state: &ScanState, palette: &Palette) {
    if let Some(tree) = build_result_tree(state, palette) {
        println!("{}", tree);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::ScanReport;
    use crate::settings::ThemePreference;
    use chrono::Local;

    #[test]
    fn tree_lists_one_line_per_engine() {
        let report: ScanReport = serde_json::from_str(
            r#"{"status":"unsafe","malicious":1,"engine_results":{"EngineA":"malicious","EngineB":"clean"}}"#,
        )
        .unwrap();
        let state = ScanState::Success {
            url: "http://phish.test".into(),
            report,
            scanned_at: Local::now(),
        };
        let palette = Palette::for_theme(ThemePreference::Dark);
        let text = build_result_tree(&state, &palette).unwrap().to_string();

        assert!(text.contains("http://phish.test"));
        assert!(text.contains("Engines (1 flagged / 2)"));
        assert_eq!(text.lines().filter(|l| l.contains("EngineA: ")).count(), 1);
        assert_eq!(text.lines().filter(|l| l.contains("EngineB: ")).count(), 1);
        assert!(text.contains("Some engines flagged this URL as malicious"));
    }

    #[test]
    fn idle_state_has_no_tree() {
        let palette = Palette::for_theme(ThemePreference::Light);
        assert!(build_result_tree(&ScanState::Idle, &palette).is_none());
    }
}
