use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tracecmp::{compare, NativeFormat, ReferenceFormat, TraceFormat};

const INSTRUCTIONS: usize = 20_000;

// a synthetic pair of traces agreeing on every instruction
fn traces() -> (String, String) {
    let mut ours = String::from("Loaded bench.nes (mapper 0)\n");
    let mut theirs = String::new();
    for i in 0..INSTRUCTIONS {
        let pc = 0x8000 + (i % 0x7FFF) as u16;
        let (a, x, y) = (i as u8, (i >> 1) as u8, (i >> 2) as u8);
        let cycle = i * 3;
        ours.push_str(&format!(
            "c{cycle} A:{a:02X} X:{x:02X} Y:{y:02X} S:FD P:nvubdIzc ${pc:04X}: NOP\n"
        ));
        theirs.push_str(&format!(
            "{pc:04X}  EA        NOP                             A:{a:02X} X:{x:02X} Y:{y:02X} P:24 SP:FD PPU:  0, 21 CYC:{}\n",
            cycle + 7
        ));
    }
    (ours, theirs)
}

fn criterion_benchmark(c: &mut Criterion) {
    let (ours, theirs) = traces();

    c.bench_function("native-20k", |b| {
        b.iter(|| NativeFormat::default().parse_str(black_box(&ours)).unwrap())
    });
    c.bench_function("reference-20k", |b| {
        b.iter(|| ReferenceFormat.parse_str(black_box(&theirs)).unwrap())
    });

    let ours = NativeFormat::default().parse_str(&ours).unwrap();
    let theirs = ReferenceFormat.parse_str(&theirs).unwrap();
    c.bench_function("compare-20k", |b| {
        b.iter(|| compare(black_box(&ours), black_box(&theirs)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
