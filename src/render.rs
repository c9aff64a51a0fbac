//! Text rendering of [`Report`]s.
//!
//! Decoders collect; only this module (and the driver's JSON path) turns
//! findings into lines.  Warnings are prefixed `* `, errors `** `, and each
//! nesting level indents by two spaces.

use crate::report::{Report, Severity};

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for finding in &report.findings {
        let indent = "  ".repeat(finding.depth as usize + 1);
        let prefix = match finding.severity {
            Severity::Info    => "",
            Severity::Warning => "* ",
            Severity::Error   => "** ",
        };
        out.push_str(&indent);
        out.push_str(prefix);
        out.push_str(&finding.message);
        out.push('\n');
    }
    out.push_str(&format!("  => {}\n", report.verdict.label()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Report, Verdict};

    #[test]
    fn severity_prefixes_and_indentation() {
        let mut r = Report::new();
        r.info(0, "top");
        r.warning(1, "odd");
        r.error(2, "bad");
        let text = render_text(&r.finish(Verdict::Invalid));
        assert_eq!(text, "  top\n    * odd\n      ** bad\n  => invalid\n");
    }
}
