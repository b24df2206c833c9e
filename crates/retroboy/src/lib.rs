use anyhow::{bail, Context, Result};
use retroboy_sm83::{
    BootState, Bus, Cpu, CpuConfig, CpuError, CpuEvent, Dispatch, FlatBus, RunState, Step,
};

pub const USAGE: &str = "usage: retroboy <image> [--load <addr>] [--pc <addr>] [--ticks <n>] [--zeroed]";

/// Host settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub image: String,
    /// Address the image is copied to.
    pub load: u16,
    /// Entry point; the boot state's PC when unset.
    pub pc: Option<u16>,
    /// Tick limit for the clock loop.
    pub ticks: u64,
    pub boot: BootState,
}

impl Options {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut image = None;
        let mut load = 0x0000;
        let mut pc = None;
        let mut ticks = 1_000_000;
        let mut boot = BootState::Dmg;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--load" => load = parse_u16(&flag_value(&mut args, "--load")?)?,
                "--pc" => pc = Some(parse_u16(&flag_value(&mut args, "--pc")?)?),
                "--ticks" => {
                    let value = flag_value(&mut args, "--ticks")?;
                    ticks = value
                        .parse()
                        .with_context(|| format!("invalid tick count '{value}'"))?;
                }
                "--zeroed" => boot = BootState::Zeroed,
                other if other.starts_with("--") => bail!("unknown option '{other}'\n{USAGE}"),
                other => {
                    if image.replace(other.to_string()).is_some() {
                        bail!("more than one image path given\n{USAGE}");
                    }
                }
            }
        }

        let image = image.with_context(|| format!("no image path given\n{USAGE}"))?;
        Ok(Self {
            image,
            load,
            pc,
            ticks,
            boot,
        })
    }

    pub fn cpu_config(&self) -> CpuConfig {
        match self.pc {
            Some(pc) => CpuConfig::builder().boot(self.boot).entry(pc).build(),
            None => CpuConfig::builder().boot(self.boot).build(),
        }
    }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .with_context(|| format!("{flag} expects a value"))
}

/// Accepts `0x1234`, `$1234` or decimal.
fn parse_u16(text: &str) -> Result<u16> {
    let parsed = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix('$')) {
        u16::from_str_radix(hex, 16)
    } else {
        text.parse()
    };
    parsed.with_context(|| format!("invalid address '{text}'"))
}

/// 64 KiB RAM that also counts dispatches and reports core events.
pub struct HostBus {
    ram: FlatBus,
    pub instructions: u64,
    pub events: Vec<CpuEvent>,
}

impl HostBus {
    pub fn new(ram: FlatBus) -> Self {
        Self {
            ram,
            instructions: 0,
            events: Vec::new(),
        }
    }
}

impl Bus for HostBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.ram.read8(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.ram.write8(addr, value);
    }

    fn cpu_event(&mut self, event: CpuEvent) {
        log::info!("cpu event: {event:?}");
        self.events.push(event);
    }

    fn instruction_dispatched(&mut self, _dispatch: &Dispatch) {
        self.instructions += 1;
    }
}

/// Why the clock loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    TickLimit,
    /// Halted or stopped with no interrupt controller to wake it.
    Idle(RunState),
    LockedUp(CpuError),
}

#[derive(Debug)]
pub struct Report {
    pub exit: Exit,
    pub ticks: u64,
    pub instructions: u64,
    pub cpu: Cpu,
}

/// Load `image` and drive the core one tick at a time.
pub fn run_image(image: &[u8], options: &Options) -> Result<Report> {
    if usize::from(options.load) + image.len() > 0x10000 {
        bail!(
            "image of {} bytes does not fit at 0x{:04X}",
            image.len(),
            options.load
        );
    }

    let mut ram = FlatBus::new();
    ram.load(options.load, image);
    let mut bus = HostBus::new(ram);
    let mut cpu = Cpu::with_config(options.cpu_config());
    log::info!(
        "loaded {} bytes at 0x{:04X}, entry 0x{:04X}",
        image.len(),
        options.load,
        cpu.regs.pc
    );

    let mut ticks = 0;
    let exit = loop {
        if ticks >= options.ticks {
            break Exit::TickLimit;
        }
        ticks += 1;
        match cpu.step(&mut bus) {
            Ok(Step::Busy { .. }) | Ok(Step::Executed(_)) => {}
            Ok(Step::Idle(state)) => break Exit::Idle(state),
            Err(err) => break Exit::LockedUp(err),
        }
    };

    Ok(Report {
        exit,
        ticks,
        instructions: bus.instructions,
        cpu,
    })
}

pub fn run(options: &Options) -> Result<Report> {
    let image = std::fs::read(&options.image)
        .with_context(|| format!("failed to read image '{}'", options.image))?;
    run_image(&image, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parses_flags_in_any_order() {
        let options =
            Options::parse(args(&["--ticks", "500", "prog.bin", "--load", "0x0100", "--zeroed"]))
                .unwrap();
        assert_eq!(options.image, "prog.bin");
        assert_eq!(options.load, 0x0100);
        assert_eq!(options.ticks, 500);
        assert_eq!(options.boot, BootState::Zeroed);
        assert_eq!(options.pc, None);

        let options = Options::parse(args(&["prog.bin", "--pc", "$C000"])).unwrap();
        assert_eq!(options.pc, Some(0xC000));
        assert_eq!(options.cpu_config().entry, Some(0xC000));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Options::parse(args(&[])).is_err());
        assert!(Options::parse(args(&["a.bin", "b.bin"])).is_err());
        assert!(Options::parse(args(&["a.bin", "--load"])).is_err());
        assert!(Options::parse(args(&["a.bin", "--pc", "0xZZ"])).is_err());
        assert!(Options::parse(args(&["a.bin", "--fast"])).is_err());
    }

    fn options_at(load: u16) -> Options {
        Options {
            image: String::new(),
            load,
            pc: Some(load),
            ticks: 10_000,
            boot: BootState::Zeroed,
        }
    }

    #[test]
    fn runs_until_halt() {
        // LD A, 0x05; DEC A; JR NZ, -3; HALT
        let image = [0x3E, 0x05, 0x3D, 0x20, 0xFD, 0x76];
        let report = run_image(&image, &options_at(0x0100)).unwrap();

        assert_eq!(report.exit, Exit::Idle(RunState::Halted));
        assert_eq!(report.cpu.regs.a(), 0);
        assert_eq!(report.instructions, 1 + 5 * 2 + 1);
        // 8 + 5 * 4 + 4 * 12 + 8 + 4, plus one fetch tick per instruction.
        assert_eq!(report.ticks, 88 + report.instructions + 1);
    }

    #[test]
    fn stops_on_invalid_opcode() {
        let report = run_image(&[0x00, 0xDD], &options_at(0)).unwrap();
        assert_eq!(
            report.exit,
            Exit::LockedUp(CpuError::InvalidOpcode {
                opcode: 0xDD,
                addr: 0x0001
            })
        );
    }

    #[test]
    fn stops_at_tick_limit() {
        // JR -2
        let mut options = options_at(0);
        options.ticks = 100;
        let report = run_image(&[0x18, 0xFE], &options).unwrap();
        assert_eq!(report.exit, Exit::TickLimit);
        assert_eq!(report.ticks, 100);
    }

    #[test]
    fn rejects_image_past_end_of_memory() {
        assert!(run_image(&[0; 0x20], &options_at(0xFFF0)).is_err());
    }
}
