use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;

use tracecmp::format::native::NATIVE_CYCLE_OFFSET;
use tracecmp::{compare, NativeFormat, ReferenceFormat, Report, TraceFormat};

// structopt defaults are strings, kept in step with NATIVE_CYCLE_OFFSET by a test
const CYCLE_OFFSET: &str = "7";

#[derive(Debug, StructOpt)]
#[structopt(
    name = "tracecmp",
    about = "Finds the first instruction where two CPU traces disagree"
)]
struct Opt {
    /// Trace written by the emulator under test
    #[structopt(parse(from_os_str), default_value = "logs/mine.txt")]
    ours: PathBuf,

    /// nestest style trace from the reference emulator
    #[structopt(parse(from_os_str), default_value = "logs/theirs.txt")]
    theirs: PathBuf,

    /// Cycles added to our trace to line up with the reference reset sequence
    #[structopt(long, default_value = CYCLE_OFFSET)]
    cycle_offset: u64,

    /// Number of instructions to print before the divergence
    #[structopt(long, default_value = "0")]
    context: usize,

    #[structopt(long, default_value = "ours")]
    ours_label: String,

    #[structopt(long, default_value = "theirs")]
    theirs_label: String,

    /// Silence all log output
    #[structopt(short, long)]
    quiet: bool,

    /// Verbose logging (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    stderrlog::new()
        .module(module_path!())
        .quiet(opt.quiet)
        .verbosity(opt.verbose + 1)
        .init()?;

    let native = NativeFormat::with_cycle_offset(opt.cycle_offset);
    let ours = native
        .parse_file(&opt.ours)
        .with_context(|| format!("cannot load {}", opt.ours_label))?;
    let theirs = ReferenceFormat
        .parse_file(&opt.theirs)
        .with_context(|| format!("cannot load {}", opt.theirs_label))?;

    let report = Report::new(&opt.ours_label, &opt.theirs_label).with_context(opt.context);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report.write_counts(&mut out, ours.len(), theirs.len())?;

    let comparison = compare(&ours, &theirs);
    report.write_outcome(&mut out, &ours, &comparison)?;
    out.flush()?;

    if comparison.divergence().is_some() {
        std::process::exit(1);
    }
    Ok(())
}
