use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::isa::encode::assemble;
use mipsim_core::sim::{RunOutcome, Simulator};
use mipsim_core::stats::SimStats;
use mipsim_core::SimError;

/// Upper bound on cycles for `run_to_end`, so a broken pipeline fails instead of hanging.
const CYCLE_GUARD: u64 = 10_000;

#[derive(Debug)]
pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    /// A simulator for `program` with the default config.
    pub fn new(program: &[u32]) -> Self {
        Self::with_config(program, &Config::default())
    }

    pub fn with_config(program: &[u32], config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();

        let mut config = config.clone();
        if config.general.max_cycles.is_none() {
            config.general.max_cycles = Some(CYCLE_GUARD);
        }
        let sim = Simulator::new(assemble(program), None, &config).expect("valid test config");
        Self { sim }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: i32) {
        self.sim.cpu.regs.write(reg, val as u32);
    }

    /// Read a general-purpose register value as signed.
    pub fn reg(&self, reg: usize) -> i32 {
        self.sim.cpu.regs.read(reg) as i32
    }

    /// Store a big-endian word in data memory.
    pub fn set_word(&mut self, addr: usize, val: i32) {
        self.sim.cpu.data_mem[addr..addr + 4].copy_from_slice(&val.to_be_bytes());
    }

    /// Read a big-endian word from data memory.
    pub fn word(&self, addr: usize) -> i32 {
        let bytes: [u8; 4] = self.sim.cpu.data_mem[addr..addr + 4].try_into().unwrap();
        i32::from_be_bytes(bytes)
    }

    pub fn stats(&self) -> &SimStats {
        &self.sim.cpu.stats
    }

    /// Run until the pipeline halts. Panics on a simulator error.
    pub fn run_to_end(&mut self) {
        let outcome = self.sim.run().expect("program runs to completion");
        assert_eq!(outcome, RunOutcome::Completed);
    }

    /// Run until the pipeline halts, returning any error.
    pub fn try_run(&mut self) -> Result<RunOutcome, SimError> {
        self.sim.run()
    }

    /// Run the CPU for a specific number of cycles (fewer if it halts).
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            if !self.sim.step().expect("cycle succeeds") {
                break;
            }
        }
    }
}
