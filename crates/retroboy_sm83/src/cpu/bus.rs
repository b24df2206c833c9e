use super::{CpuEvent, Dispatch};

/// The memory/I/O capability the core executes against.
///
/// The core borrows the bus only for the duration of one `step`, so the
/// host may rewire it (bank switching, remapping) between steps. Reads and
/// writes are total: a bus that has nothing mapped returns its own
/// open-bus value.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Notification for the interrupt-controller collaborator: interrupt
    /// enable transitions, HALT/STOP entry and lock-up.
    ///
    /// Default implementation ignores the event.
    fn cpu_event(&mut self, _event: CpuEvent) {}

    /// Diagnostic hook called once per dispatched instruction, after it
    /// has executed. Nothing in the core depends on it.
    fn instruction_dispatched(&mut self, _dispatch: &Dispatch) {}
}

/// A bus built from a read closure and a write closure.
pub struct FnBus<R, W> {
    read: R,
    write: W,
}

impl<R, W> FnBus<R, W>
where
    R: FnMut(u16) -> u8,
    W: FnMut(u16, u8),
{
    pub fn new(read: R, write: W) -> Self {
        Self { read, write }
    }
}

impl<R, W> Bus for FnBus<R, W>
where
    R: FnMut(u16) -> u8,
    W: FnMut(u16, u8),
{
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        (self.read)(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        (self.write)(addr, value)
    }
}

/// Flat 64 KiB RAM covering the whole address space.
#[derive(Clone)]
pub struct FlatBus {
    memory: Vec<u8>,
}

impl Default for FlatBus {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatBus {
    pub fn new() -> Self {
        Self {
            memory: vec![0; 0x10000],
        }
    }

    /// Copy `data` into memory starting at `addr`, wrapping at the top of
    /// the address space.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        for (offset, byte) in data.iter().enumerate() {
            let target = addr.wrapping_add(offset as u16);
            self.memory[target as usize] = *byte;
        }
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory
    }
}

impl Bus for FlatBus {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

impl std::fmt::Debug for FlatBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatBus").finish_non_exhaustive()
    }
}
