use std::io::Write;

use crate::compare::{Comparison, Outcome};
use crate::snapshot::Snapshot;

pub struct Report<'a> {
    ours_label: &'a str,
    theirs_label: &'a str,
    // snapshots printed ahead of a divergence
    context: usize,
}

impl<'a> Report<'a> {
    pub fn new(ours_label: &'a str, theirs_label: &'a str) -> Self {
        Report {
            ours_label,
            theirs_label,
            context: 0,
        }
    }

    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn write_counts(
        &self,
        out: &mut impl Write,
        ours_len: usize,
        theirs_len: usize,
    ) -> std::io::Result<()> {
        writeln!(out, "{} read: {}", self.ours_label, ours_len)?;
        writeln!(out, "{} read: {}", self.theirs_label, theirs_len)
    }

    pub fn write_outcome(
        &self,
        out: &mut impl Write,
        ours: &[Snapshot],
        comparison: &Comparison,
    ) -> std::io::Result<()> {
        match &comparison.outcome {
            Outcome::Diverged(divergence) => {
                writeln!(out, "Discrepancy found on line {}", divergence.index)?;
                let fields = divergence
                    .fields
                    .iter()
                    .map(|f| f.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(out, "\tdiffering: {fields}")?;
                let start = divergence.index.saturating_sub(self.context);
                for (idx, snapshot) in ours[start..divergence.index].iter().enumerate() {
                    writeln!(out, "\t{:>6}  {}", start + idx, snapshot)?;
                }
                writeln!(out, "\t{} -> {}", self.ours_label, divergence.ours)?;
                writeln!(out, "\t{} -> {}", self.theirs_label, divergence.theirs)
            }
            Outcome::Matched => {
                writeln!(out, "Traces match ({} instructions)", comparison.ours_len)
            }
            Outcome::Truncated { matched } => {
                if *matched == 0 {
                    writeln!(out, "No instructions to compare")?;
                } else {
                    writeln!(out, "Traces match up to index {}", matched - 1)?;
                }
                let (shorter, longer) = if comparison.ours_len < comparison.theirs_len {
                    (self.ours_label, self.theirs_label)
                } else {
                    (self.theirs_label, self.ours_label)
                };
                writeln!(
                    out,
                    "Length mismatch: {} has {} instructions, {} has {}; {} may have stopped early",
                    self.ours_label,
                    comparison.ours_len,
                    self.theirs_label,
                    comparison.theirs_len,
                    shorter,
                )?;
                log::warn!("{shorter} trace is shorter than {longer} trace");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;

    fn trace(len: usize) -> Vec<Snapshot> {
        (0..len)
            .map(|i| Snapshot {
                pc: 0x8000 + i as u16,
                a: i as u8,
                ..Default::default()
            })
            .collect()
    }

    fn render(ours: &[Snapshot], theirs: &[Snapshot], report: Report) -> String {
        let comparison = compare(ours, theirs);
        let mut out = Vec::new();
        report
            .write_counts(&mut out, ours.len(), theirs.len())
            .unwrap();
        report.write_outcome(&mut out, ours, &comparison).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_matched() {
        let output = render(&trace(3), &trace(3), Report::new("RNES", "FCEUX"));
        assert_eq!(
            "RNES read: 3\nFCEUX read: 3\nTraces match (3 instructions)\n",
            output
        );
    }

    #[test]
    fn test_diverged() {
        let ours = trace(4);
        let mut theirs = trace(4);
        theirs[2].x = 0x10;
        let output = render(&ours, &theirs, Report::new("ours", "theirs"));
        assert_eq!(
            "ours read: 4\n\
             theirs read: 4\n\
             Discrepancy found on line 2\n\
             \tdiffering: x\n\
             \tours -> PC:8002 A:02 X:00 Y:00\n\
             \ttheirs -> PC:8002 A:02 X:10 Y:00\n",
            output
        );
    }

    #[test]
    fn test_diverged_with_context() {
        let ours = trace(6);
        let mut theirs = trace(6);
        theirs[4].pc = 0x9000;
        let output = render(&ours, &theirs, Report::new("ours", "theirs").with_context(2));
        assert!(output.contains("\t     2  PC:8002 A:02 X:00 Y:00\n\t     3  PC:8003"));
        assert!(!output.contains("PC:8001"));
    }

    #[test]
    fn test_truncated() {
        let output = render(&trace(10), &trace(7), Report::new("ours", "theirs"));
        assert!(output.contains("Traces match up to index 6\n"));
        assert!(output.contains(
            "Length mismatch: ours has 10 instructions, theirs has 7; theirs may have stopped early"
        ));
        assert!(!output.contains("Discrepancy"));
    }

    #[test]
    fn test_nothing_to_compare() {
        let output = render(&[], &trace(2), Report::new("ours", "theirs"));
        assert!(output.contains("No instructions to compare\n"));
        assert!(output.contains("ours may have stopped early"));
    }
}
