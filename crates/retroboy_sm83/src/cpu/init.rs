use typed_builder::TypedBuilder;

use super::{Cpu, Registers, RunState};

/// Register values established by initialization and `reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootState {
    /// The state the DMG boot ROM hands to cartridge code at 0x0100.
    #[default]
    Dmg,
    /// Every register zero, PC at 0x0000.
    Zeroed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, TypedBuilder)]
pub struct CpuConfig {
    #[builder(default)]
    pub boot: BootState,
    /// Overrides the boot state's program counter.
    #[builder(default, setter(strip_option))]
    pub entry: Option<u16>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ticks: 0,
            state: RunState::Running,
            ime: false,
            config,
            fetched: [0; 3],
            fetched_len: 0,
        };
        cpu.apply_boot_state();
        cpu
    }

    pub fn config(&self) -> CpuConfig {
        self.config
    }

    /// Return to the configured power-on state with an empty tick budget.
    pub fn reset(&mut self) {
        self.ticks = 0;
        self.state = RunState::Running;
        self.ime = false;
        self.fetched_len = 0;
        self.apply_boot_state();
    }

    fn apply_boot_state(&mut self) {
        self.regs = Registers::default();
        match self.config.boot {
            BootState::Dmg => {
                // Registers (DMG mode) as left by the boot ROM, per Pan Docs.
                self.regs.set_af(0x01B0);
                self.regs.set_bc(0x0013);
                self.regs.set_de(0x00D8);
                self.regs.set_hl(0x014D);
                self.regs.sp = 0xFFFE;
                self.regs.pc = 0x0100;
            }
            BootState::Zeroed => {}
        }
        if let Some(entry) = self.config.entry {
            self.regs.pc = entry;
        }
    }
}
