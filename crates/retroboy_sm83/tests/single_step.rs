//! Conformance run against the public per-opcode SM83 JSON vectors
//! (`sm83/v1/*.json`, one file per opcode).
//!
//! The vectors are not checked in. Place them under
//! `assets/sm83/v1/` at the workspace root and run with
//! `cargo test -p retroboy_sm83 -- --ignored`.

use std::path::{Path, PathBuf};

use retroboy_sm83::{BootState, Bus, Cpu, CpuConfig, FlatBus, Step};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Snapshot {
    a: u8,
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    f: u8,
    h: u8,
    l: u8,
    pc: u16,
    sp: u16,
    ram: Vec<(u16, u8)>,
}

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    initial: Snapshot,
    #[serde(rename = "final")]
    expected: Snapshot,
    cycles: Vec<serde_json::Value>,
}

// HALT and STOP depend on the interrupt controller the vectors model.
const SKIPPED: &[&str] = &["10.json", "76.json"];

fn vector_dir() -> PathBuf {
    let candidates = [
        PathBuf::from("assets/sm83/v1"),
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/sm83/v1"),
    ];

    for path in &candidates {
        if path.is_dir() {
            return path.clone();
        }
    }

    panic!("sm83 test vectors not found. Tried: {:?}", candidates)
}

fn load_cases(path: &Path) -> Vec<Case> {
    let data = std::fs::read(path).unwrap_or_else(|err| panic!("read {path:?}: {err}"));
    serde_json::from_slice(&data).unwrap_or_else(|err| panic!("parse {path:?}: {err}"))
}

fn prepare(snapshot: &Snapshot) -> (Cpu, FlatBus) {
    let config = CpuConfig::builder().boot(BootState::Zeroed).build();
    let mut cpu = Cpu::with_config(config);
    cpu.regs.set_a(snapshot.a);
    cpu.regs.set_f_bits(snapshot.f);
    cpu.regs.set_b(snapshot.b);
    cpu.regs.set_c(snapshot.c);
    cpu.regs.set_d(snapshot.d);
    cpu.regs.set_e(snapshot.e);
    cpu.regs.set_h(snapshot.h);
    cpu.regs.set_l(snapshot.l);
    cpu.regs.sp = snapshot.sp;
    // The vectors record PC after the opcode prefetch.
    cpu.regs.pc = snapshot.pc.wrapping_sub(1);

    let mut bus = FlatBus::new();
    for &(addr, value) in &snapshot.ram {
        bus.write8(addr, value);
    }
    (cpu, bus)
}

fn check(case: &Case) -> Result<(), String> {
    let (mut cpu, mut bus) = prepare(&case.initial);
    match cpu.step(&mut bus) {
        Ok(Step::Executed(_)) => {}
        other => return Err(format!("step returned {other:?}")),
    }

    let want = &case.expected;
    let regs = &cpu.regs;
    let got = [
        regs.a(),
        regs.f().bits(),
        regs.b(),
        regs.c(),
        regs.d(),
        regs.e(),
        regs.h(),
        regs.l(),
    ];
    let expected = [
        want.a, want.f, want.b, want.c, want.d, want.e, want.h, want.l,
    ];
    if got != expected {
        return Err(format!("registers: got {got:02X?}, want {expected:02X?}"));
    }
    if regs.sp != want.sp {
        return Err(format!("sp: got {:04X}, want {:04X}", regs.sp, want.sp));
    }
    if regs.pc.wrapping_add(1) != want.pc {
        return Err(format!(
            "pc: got {:04X}, want {:04X}",
            regs.pc.wrapping_add(1),
            want.pc
        ));
    }
    for &(addr, value) in &want.ram {
        let actual = bus.read8(addr);
        if actual != value {
            return Err(format!("ram[{addr:04X}]: got {actual:02X}, want {value:02X}"));
        }
    }
    if usize::from(cpu.ticks() / 4) != case.cycles.len() {
        return Err(format!(
            "ticks: got {}, want {} M-cycles",
            cpu.ticks(),
            case.cycles.len()
        ));
    }
    Ok(())
}

#[test]
#[ignore]
fn single_step_vectors() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut files: Vec<PathBuf> = std::fs::read_dir(vector_dir())
        .expect("list vector directory")
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut failures = Vec::new();
    let mut total = 0usize;
    for path in &files {
        let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
        if SKIPPED.contains(&file_name) {
            continue;
        }
        for case in load_cases(path) {
            total += 1;
            if let Err(reason) = check(&case) {
                failures.push(format!("{}: {reason}", case.name));
            }
        }
    }

    assert!(total > 0, "no vectors found");
    assert!(
        failures.is_empty(),
        "{} of {total} cases failed; first: {:#?}",
        failures.len(),
        &failures[..failures.len().min(20)]
    );
}
