use std::fmt::{Display, Formatter};

/// CPU state recorded right before an instruction executes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub cycle: Option<u64>,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: Option<String>,
    pub sp: Option<u8>,
    pub pc: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Pc,
    A,
    X,
    Y,
    P,
    Sp,
    Cycle,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Pc => "pc",
            Field::A => "a",
            Field::X => "x",
            Field::Y => "y",
            Field::P => "p",
            Field::Sp => "sp",
            Field::Cycle => "cycle",
        };
        write!(f, "{name}")
    }
}

// optional fields only count when both traces recorded them
fn both_differ<T: PartialEq>(left: &Option<T>, right: &Option<T>) -> bool {
    matches!((left, right), (Some(l), Some(r)) if l != r)
}

impl Snapshot {
    /// Fields on which `self` and `other` disagree.
    ///
    /// A field one of the traces does not record is never reported.
    pub fn diff(&self, other: &Snapshot) -> Vec<Field> {
        let mut fields = Vec::new();
        if self.pc != other.pc {
            fields.push(Field::Pc);
        }
        if self.a != other.a {
            fields.push(Field::A);
        }
        if self.x != other.x {
            fields.push(Field::X);
        }
        if self.y != other.y {
            fields.push(Field::Y);
        }
        if both_differ(&self.p, &other.p) {
            fields.push(Field::P);
        }
        if both_differ(&self.sp, &other.sp) {
            fields.push(Field::Sp);
        }
        if both_differ(&self.cycle, &other.cycle) {
            fields.push(Field::Cycle);
        }
        fields
    }

    pub fn matches(&self, other: &Snapshot) -> bool {
        self.diff(other).is_empty()
    }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PC:{:04X} A:{:02X} X:{:02X} Y:{:02X}",
            self.pc, self.a, self.x, self.y
        )?;
        if let Some(p) = &self.p {
            write!(f, " P:{p}")?;
        }
        if let Some(sp) = self.sp {
            write!(f, " SP:{sp:02X}")?;
        }
        if let Some(cycle) = self.cycle {
            write!(f, " CYC:{cycle}")?;
        }
        Ok(())
    }
}
