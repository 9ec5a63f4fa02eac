use mips_lite_core::config::Config;
use mips_lite_core::mem::ImageMemory;
use mips_lite_core::sim::Simulator;

/// Test fixture wrapping a simulator over an in-memory image.
pub struct TestContext {
    pub sim: Simulator<ImageMemory>,
}

impl TestContext {
    /// Builds a context from a program image.
    pub fn new(program: &[u32], forwarding: bool) -> Self {
        Self::with_image(
            ImageMemory::from_words(program.to_vec()).expect("program fits in memory"),
            forwarding,
        )
    }

    /// Builds a context from a program image plus data words at given byte
    /// addresses, zero-filling the gap.
    pub fn with_data(program: &[u32], data: &[(u32, u32)], forwarding: bool) -> Self {
        let mut words = program.to_vec();
        for &(addr, value) in data {
            let index = (addr / 4) as usize;
            if index >= words.len() {
                words.resize(index + 1, 0);
            }
            words[index] = value;
        }
        Self::with_image(
            ImageMemory::from_words(words).expect("image fits in memory"),
            forwarding,
        )
    }

    fn with_image(image: ImageMemory, forwarding: bool) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let config = Config {
            forwarding,
            ..Config::default()
        };
        Self {
            sim: Simulator::new(image, &config),
        }
    }

    /// Runs the program to completion, panicking on any fault or timeout.
    pub fn run_to_halt(&mut self) {
        self.sim.run().expect("program runs to HALT");
    }

    /// Advances the simulation by one cycle.
    pub fn step(&mut self) {
        self.sim.tick().expect("cycle succeeds");
    }

    /// Reads a general-purpose register value.
    pub fn reg(&self, idx: u8) -> u32 {
        self.sim.engine.regs.read(idx)
    }

    /// The engine's current program counter.
    pub fn pc(&self) -> u32 {
        self.sim.engine.pc()
    }

    /// Total simulated clock cycles so far.
    pub fn cycles(&self) -> u64 {
        self.sim.engine.stats.clock_cycles
    }

    /// Total stall cycles so far.
    pub fn stalls(&self) -> u64 {
        self.sim.engine.stats.stalls
    }
}
