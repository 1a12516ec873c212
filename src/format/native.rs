//! The trace printed by our own CPU when op tracing is enabled:
//!
//! ```text
//! c12 A:05 X:00 Y:00 S:FD P:nvubdIzc $8000: LDA
//! ```
//!
//! Only lines starting with the sentinel are records, everything else
//! (headers, blank lines, other debug output) is ignored.

use super::field::{dec_u64, decode, hex_u16, hex_u8, labelled};
use super::TraceFormat;
use crate::error::TraceError;
use crate::snapshot::Snapshot;

pub const NATIVE_SENTINEL: char = 'c';

/// Cycles spent in the reset sequence before the first instruction.
///
/// Our CPU starts counting at the first fetched opcode while nestest-style
/// reference logs already account 7 cycles to reset, so our count is shifted
/// to line up with them. Emulators with a different power-up sequence need a
/// different value.
pub const NATIVE_CYCLE_OFFSET: u64 = 7;

/// Index of the `$PPPP:` token holding the program counter.
pub const NATIVE_PC_TOKEN: usize = 6;
/// The program counter starts right after the `$`.
pub const NATIVE_PC_START: usize = 1;
pub const NATIVE_PC_WIDTH: usize = 4;

const NATIVE_SP_TOKEN: usize = 4;
const NATIVE_STATUS_TOKEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeLayout {
    pub sentinel: char,
    pub cycle_offset: u64,
    pub sp_token: usize,
    pub status_token: usize,
    pub pc_token: usize,
    pub pc_start: usize,
    pub pc_width: usize,
}

impl Default for NativeLayout {
    fn default() -> Self {
        NativeLayout {
            sentinel: NATIVE_SENTINEL,
            cycle_offset: NATIVE_CYCLE_OFFSET,
            sp_token: NATIVE_SP_TOKEN,
            status_token: NATIVE_STATUS_TOKEN,
            pc_token: NATIVE_PC_TOKEN,
            pc_start: NATIVE_PC_START,
            pc_width: NATIVE_PC_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFormat {
    layout: NativeLayout,
}

impl NativeFormat {
    pub fn new(layout: NativeLayout) -> Self {
        NativeFormat { layout }
    }

    pub fn with_cycle_offset(cycle_offset: u64) -> Self {
        NativeFormat::new(NativeLayout {
            cycle_offset,
            ..Default::default()
        })
    }

    pub fn layout(&self) -> &NativeLayout {
        &self.layout
    }
}

fn malformed(line: usize, reason: impl Into<String>, text: &str) -> TraceError {
    TraceError::MalformedRecord {
        line,
        reason: reason.into(),
        text: text.to_string(),
    }
}

impl TraceFormat for NativeFormat {
    fn name(&self) -> &'static str {
        "native"
    }

    fn parse_line(&self, line: usize, text: &str) -> Result<Option<Snapshot>, TraceError> {
        let layout = &self.layout;
        if !text.starts_with(layout.sentinel) {
            return Ok(None);
        }

        let tokens = text.split_whitespace().collect::<Vec<_>>();
        // registers always sit in tokens 1 to 3
        let required = [3, layout.sp_token, layout.status_token, layout.pc_token]
            .into_iter()
            .max()
            .unwrap_or(3)
            + 1;
        if tokens.len() < required {
            return Err(malformed(
                line,
                format!("expected at least {required} tokens"),
                text,
            ));
        }

        let cycle = decode(dec_u64, &tokens[0][layout.sentinel.len_utf8()..], line, "cycle")?
            .checked_add(layout.cycle_offset)
            .ok_or_else(|| malformed(line, "cycle count overflows", text))?;

        let register = |idx: usize, field: &'static str| -> Result<u8, TraceError> {
            let (_, (_, value)) = labelled(tokens[idx])
                .map_err(|_| malformed(line, format!("expected {field} as <label>:<hex>"), text))?;
            decode(hex_u8, value, line, field)
        };
        let a = register(1, "a")?;
        let x = register(2, "x")?;
        let y = register(3, "y")?;

        // both are optional: a token with an unexpected label is just not recorded
        let sp = match labelled(tokens[layout.sp_token]) {
            Ok((_, ("S", value))) => Some(decode(hex_u8, value, line, "sp")?),
            _ => None,
        };
        let p = match labelled(tokens[layout.status_token]) {
            Ok((_, ("P", value))) => Some(value.to_string()),
            _ => None,
        };

        let pc_window = tokens[layout.pc_token]
            .get(layout.pc_start..layout.pc_start + layout.pc_width)
            .ok_or_else(|| malformed(line, "program counter token is too short", text))?;
        let pc = decode(hex_u16, pc_window, line, "pc")?;

        Ok(Some(Snapshot {
            cycle: Some(cycle),
            a,
            x,
            y,
            p,
            sp,
            pc,
        }))
    }
}
