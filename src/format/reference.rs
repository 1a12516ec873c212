//! nestest / Nintendulator style logs, one instruction per line:
//!
//! ```text
//! C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 21 CYC:7
//! ```

use super::field::{dec_u64, decode, hex_u16, hex_u8, labelled};
use super::TraceFormat;
use crate::error::TraceError;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceFormat;

impl TraceFormat for ReferenceFormat {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn parse_line(&self, line: usize, text: &str) -> Result<Option<Snapshot>, TraceError> {
        let mut tokens = text.split_whitespace();
        let pc = match tokens.next() {
            Some(token) => decode(hex_u16, token, line, "pc")?,
            None => return Ok(None),
        };

        let (mut a, mut x, mut y, mut sp, mut cycle) = (None, None, None, None, None);
        for token in tokens {
            // disassembly and unknown keys are skipped
            let (key, value) = match labelled(token) {
                Ok((_, pair)) => pair,
                Err(_) => continue,
            };
            match key {
                "A" => a = Some(decode(hex_u8, value, line, "a")?),
                "X" => x = Some(decode(hex_u8, value, line, "x")?),
                "Y" => y = Some(decode(hex_u8, value, line, "y")?),
                "SP" => sp = Some(decode(hex_u8, value, line, "sp")?),
                "CYC" => cycle = Some(decode(dec_u64, value, line, "cycle")?),
                _ => (),
            }
        }

        let missing = |register: &str| TraceError::MalformedRecord {
            line,
            reason: format!("missing register {register}"),
            text: text.to_string(),
        };
        Ok(Some(Snapshot {
            cycle,
            a: a.ok_or_else(|| missing("A"))?,
            x: x.ok_or_else(|| missing("X"))?,
            y: y.ok_or_else(|| missing("Y"))?,
            p: None,
            sp,
            pc,
        }))
    }
}
