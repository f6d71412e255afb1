use crate::application::read_models::{MatchReport, MatchView};
use crate::ports::outbound::MatchFormatter;
use crate::shared::Result;

/// Markdown table header for extracted components
const COMPONENT_TABLE_HEADER: &str = "| Component | Kind | Lines | Props | Complexity |\n";

/// Markdown table separator line for extracted components
const COMPONENT_TABLE_SEPARATOR: &str = "|-----------|------|-------|-------|------------|\n";

/// Markdown table header for the match summary
const MATCH_TABLE_HEADER: &str =
    "| Your component | Design system component | Source | Score | Confidence |\n";

/// Markdown table separator line for the match summary
const MATCH_TABLE_SEPARATOR: &str =
    "|----------------|-------------------------|--------|-------|------------|\n";

/// MarkdownFormatter adapter for reports meant for pull request comments
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_report(&self, output: &mut String, report: &MatchReport) {
        output.push_str(&format!(
            "## `{}`\n\n",
            Self::escape_markdown_table_cell(&report.metadata.file)
        ));

        if report.components.is_empty() {
            output.push_str("No React components found.\n\n");
            self.render_diagnostics(output, report);
            return;
        }

        self.render_components(output, report);
        self.render_diagnostics(output, report);

        if report.matches.is_empty() {
            output.push_str(&format!(
                "No design system components scored {} or higher.\n\n",
                report.metadata.threshold
            ));
            return;
        }

        self.render_match_table(output, report);
        for view in &report.matches {
            self.render_match_details(output, view);
        }
    }

    fn render_components(&self, output: &mut String, report: &MatchReport) {
        output.push_str("### Components\n\n");
        output.push_str(COMPONENT_TABLE_HEADER);
        output.push_str(COMPONENT_TABLE_SEPARATOR);
        for component in &report.components {
            let props: Vec<&str> = component.props.iter().map(|p| p.name.as_str()).collect();
            output.push_str(&format!(
                "| {} | {} | {}-{} | {} | {} |\n",
                Self::escape_markdown_table_cell(&component.name),
                component.kind,
                component.start_line,
                component.end_line,
                Self::escape_markdown_table_cell(&props.join(", ")),
                component.complexity
            ));
        }
        output.push('\n');
    }

    fn render_match_table(&self, output: &mut String, report: &MatchReport) {
        output.push_str("### Potential duplicates\n\n");
        output.push_str(MATCH_TABLE_HEADER);
        output.push_str(MATCH_TABLE_SEPARATOR);
        for view in &report.matches {
            let catalog_name = match &view.documentation_url {
                Some(url) => format!(
                    "[{}]({})",
                    Self::escape_markdown_table_cell(&view.catalog_name),
                    url
                ),
                None => Self::escape_markdown_table_cell(&view.catalog_name),
            };
            output.push_str(&format!(
                "| {} | {} | {} | {}% | {} |\n",
                Self::escape_markdown_table_cell(&view.component_name),
                catalog_name,
                Self::escape_markdown_table_cell(&view.catalog_source),
                view.scores.combined,
                view.confidence
            ));
        }
        output.push('\n');
    }

    fn render_match_details(&self, output: &mut String, view: &MatchView) {
        output.push_str(&format!(
            "#### {} → {}\n\n",
            view.component_name, view.catalog_name
        ));

        for reason in &view.reasons {
            output.push_str(&format!("- {}\n", reason));
        }
        for difference in &view.differences {
            output.push_str(&format!(
                "- **{}** ({}): {}\n",
                difference.category, difference.severity, difference.description
            ));
        }
        output.push('\n');

        if let Some(replacement) = &view.replacement {
            output.push_str(&format!("{}:\n\n```tsx\n", replacement.explanation));
            for import in &replacement.imports {
                output.push_str(&format!("{}\n", import));
            }
            if !replacement.imports.is_empty() {
                output.push('\n');
            }
            output.push_str(&format!("{}\n```\n\n", replacement.code));
        }
    }

    fn render_diagnostics(&self, output: &mut String, report: &MatchReport) {
        if report.diagnostics.is_empty() {
            return;
        }
        for diagnostic in &report.diagnostics {
            output.push_str(&format!("> ⚠️ {}\n", diagnostic.message));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchFormatter for MarkdownFormatter {
    fn format(&self, reports: &[MatchReport]) -> Result<String> {
        let mut output = String::from("# Design System Duplicate Report\n\n");
        for report in reports {
            self.render_report(&mut output, report);
        }
        Ok(output)
    }
}
