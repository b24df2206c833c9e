use retroboy::{Exit, Options};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = Options::parse(std::env::args().skip(1))?;
    log::info!("Running image: '{}'", options.image);
    let report = retroboy::run(&options)?;

    let regs = &report.cpu.regs;
    println!(
        "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl(),
        regs.sp,
        regs.pc
    );
    println!(
        "{} ticks, {} instructions",
        report.ticks, report.instructions
    );

    match report.exit {
        Exit::TickLimit => println!("tick limit reached"),
        Exit::Idle(state) => println!("core idle: {state:?}"),
        Exit::LockedUp(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}
