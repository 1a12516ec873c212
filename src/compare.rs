use crate::snapshot::{Field, Snapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub index: usize,
    pub ours: Snapshot,
    pub theirs: Snapshot,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    // same length, every snapshot agrees
    Matched,
    // the overlapping `matched` snapshots agree but one trace is longer
    Truncated { matched: usize },
    Diverged(Divergence),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub ours_len: usize,
    pub theirs_len: usize,
    pub outcome: Outcome,
}

impl Comparison {
    pub fn divergence(&self) -> Option<&Divergence> {
        match &self.outcome {
            Outcome::Diverged(divergence) => Some(divergence),
            _ => None,
        }
    }

    pub fn lengths_differ(&self) -> bool {
        self.ours_len != self.theirs_len
    }
}

/// Walks both traces in lockstep and stops at the first snapshot that differs.
pub fn compare(ours: &[Snapshot], theirs: &[Snapshot]) -> Comparison {
    let outcome = ours
        .iter()
        .zip(theirs)
        .enumerate()
        .find_map(|(index, (o, t))| {
            let fields = o.diff(t);
            if fields.is_empty() {
                None
            } else {
                Some(Divergence {
                    index,
                    ours: o.clone(),
                    theirs: t.clone(),
                    fields,
                })
            }
        })
        .map(Outcome::Diverged)
        .unwrap_or_else(|| {
            if ours.len() == theirs.len() {
                Outcome::Matched
            } else {
                Outcome::Truncated {
                    matched: ours.len().min(theirs.len()),
                }
            }
        });

    if let Outcome::Diverged(divergence) = &outcome {
        log::debug!(
            "traces diverge at {} on {:?}",
            divergence.index,
            divergence.fields
        );
    }

    Comparison {
        ours_len: ours.len(),
        theirs_len: theirs.len(),
        outcome,
    }
}
