use crate::application::read_models::{MatchReport, MatchView};
use crate::ports::outbound::MatchFormatter;
use crate::shared::Result;

const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------";

/// TextFormatter adapter for plain, human-readable reports
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_report(&self, output: &mut String, report: &MatchReport) {
        output.push_str(&format!("{}\n", RULE));
        output.push_str(&format!("Vibe Check: {}\n", report.metadata.file));
        output.push_str(&format!("{}\n\n", RULE));

        if report.components.is_empty() {
            output.push_str("No React components found\n");
            self.render_diagnostics(output, report);
            return;
        }

        output.push_str(&format!("Found {} component(s):\n", report.components.len()));
        for (i, component) in report.components.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} ({}, lines {}-{})\n",
                i + 1,
                component.name,
                component.kind,
                component.start_line,
                component.end_line
            ));
        }
        self.render_diagnostics(output, report);

        output.push_str(&format!(
            "\nCompared against {} design system component(s), threshold {}\n",
            report.metadata.catalog_size, report.metadata.threshold
        ));

        if report.matches.is_empty() {
            output.push_str("\nNo matches found above threshold.\n");
            return;
        }

        output.push_str(&format!("\nFound {} match(es):\n", report.matches.len()));
        for (i, view) in report.matches.iter().enumerate() {
            self.render_match(output, i + 1, view);
        }
    }

    fn render_match(&self, output: &mut String, number: usize, view: &MatchView) {
        output.push_str(&format!("\nMatch #{}\n{}\n", number, THIN_RULE));
        output.push_str(&format!(
            "Your component: {} ({})\n",
            view.component_name, view.location
        ));
        output.push_str(&format!(
            "Design system:  {} [{}]\n",
            view.catalog_name, view.catalog_source
        ));
        output.push_str(&format!(
            "Similarity:     {}% ({} confidence)\n",
            view.scores.combined, view.confidence
        ));
        output.push_str(&format!(
            "Breakdown:      name {:.1}, elements {:.1}, props {:.1}, complexity {:.1}\n",
            view.scores.name, view.scores.element_types, view.scores.props, view.scores.complexity
        ));

        if !view.reasons.is_empty() {
            output.push_str("\nReasons:\n");
            for reason in &view.reasons {
                output.push_str(&format!("  - {}\n", reason));
            }
        }

        if !view.differences.is_empty() {
            output.push_str("\nDifferences:\n");
            for difference in &view.differences {
                output.push_str(&format!(
                    "  - [{}] {}\n",
                    difference.severity, difference.description
                ));
            }
        }

        if let Some(replacement) = &view.replacement {
            output.push_str(&format!("\nSuggestion: {}\n", replacement.explanation));
            for import in &replacement.imports {
                output.push_str(&format!("  {}\n", import));
            }
            output.push_str(&format!("  {}\n", replacement.code));
        }

        if let Some(url) = &view.documentation_url {
            output.push_str(&format!("\nDocumentation: {}\n", url));
        }
    }

    fn render_diagnostics(&self, output: &mut String, report: &MatchReport) {
        for diagnostic in &report.diagnostics {
            output.push_str(&format!("  ! {}\n", diagnostic.message));
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchFormatter for TextFormatter {
    fn format(&self, reports: &[MatchReport]) -> Result<String> {
        let mut output = String::new();
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            self.render_report(&mut output, report);
        }
        Ok(output)
    }
}
