//! Simulation statistics collection and reporting.
//!
//! This module tracks the counters the pipeline updates every cycle. It provides:
//! 1. **Cycles and Instructions:** Total cycles, decoded instructions, and derived CPI/IPC.
//! 2. **Operation Mix:** One counter per ALU operation and per data memory access kind.
//! 3. **Hazards:** Injected bubbles, data and control stall requests, taken branches and jumps.

use std::fmt;
use std::time::Instant;

use crate::core::units::alu::AluControl;

/// Simulation statistics structure.
///
/// Every counter only grows, except `instructions`, which is decremented when
/// decode cancels a fetched instruction.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulated cycles.
    pub cycles: u64,
    /// Instructions fetched from inside the program and not cancelled.
    pub instructions: u64,

    /// ALU additions (including load/store address calculation).
    pub alu_add: u64,
    /// ALU subtractions (including `beq` comparisons).
    pub alu_sub: u64,
    /// ALU bitwise ANDs.
    pub alu_and: u64,
    /// ALU bitwise ORs.
    pub alu_or: u64,
    /// ALU set-on-less-than operations.
    pub alu_slt: u64,

    /// Words loaded from data memory.
    pub mem_reads: u64,
    /// Words stored to data memory.
    pub mem_writes: u64,

    /// Bubbles consumed, by IF no-op injection or by ID cancellation.
    pub bubbles: u64,
    /// Bubbles requested by data hazards.
    pub stalls_data: u64,
    /// Bubbles requested by control hazards.
    pub stalls_control: u64,
    /// Taken `beq` redirects.
    pub branches_taken: u64,
    /// `j` redirects.
    pub jumps: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions: 0,
            alu_add: 0,
            alu_sub: 0,
            alu_and: 0,
            alu_or: 0,
            alu_slt: 0,
            mem_reads: 0,
            mem_writes: 0,
            bubbles: 0,
            stalls_data: 0,
            stalls_control: 0,
            branches_taken: 0,
            jumps: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"alu"`, `"memory"`, `"hazards"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "alu", "memory", "hazards"];

const RULE: &str = "----------------------------------------------------------";
const BANNER: &str = "==========================================================";

impl SimStats {
    /// Increments the counter for one ALU evaluation.
    pub const fn record_alu(&mut self, op: AluControl) {
        match op {
            AluControl::Add => self.alu_add += 1,
            AluControl::Sub => self.alu_sub += 1,
            AluControl::And => self.alu_and += 1,
            AluControl::Or => self.alu_or += 1,
            AluControl::Slt => self.alu_slt += 1,
        }
    }

    /// Total ALU evaluations across all operations.
    pub const fn alu_total(&self) -> u64 {
        self.alu_add + self.alu_sub + self.alu_and + self.alu_or + self.alu_slt
    }

    /// Writes the requested sections to `out`.
    ///
    /// Unknown section names are ignored; an empty slice writes every section.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_sections(&self, out: &mut impl fmt::Write, sections: &[String]) -> fmt::Result {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let cyc = self.cycles.max(1) as f64;
        let pct = |n: u64| (n as f64 / cyc) * 100.0;

        writeln!(out, "{BANNER}")?;
        writeln!(out, "MIPS PIPELINE SIMULATION STATISTICS")?;
        writeln!(out, "{BANNER}")?;
        if want("summary") {
            let seconds = self.start_time.elapsed().as_secs_f64();
            let cpi = self.cycles as f64 / self.instructions.max(1) as f64;
            let ipc = self.instructions as f64 / cyc;
            writeln!(out, "host_seconds             {seconds:.4} s")?;
            writeln!(out, "sim_cycles               {}", self.cycles)?;
            writeln!(out, "sim_insts                {}", self.instructions)?;
            writeln!(out, "sim_ipc                  {ipc:.4}")?;
            writeln!(out, "sim_cpi                  {cpi:.4}")?;
            writeln!(out, "{RULE}")?;
        }
        if want("alu") {
            writeln!(out, "ALU OPERATIONS")?;
            for (name, count) in [
                ("add", self.alu_add),
                ("sub", self.alu_sub),
                ("and", self.alu_and),
                ("or", self.alu_or),
                ("slt", self.alu_slt),
            ] {
                writeln!(out, "  alu.{name:<18} {count}")?;
            }
            writeln!(out, "{RULE}")?;
        }
        if want("memory") {
            writeln!(out, "DATA MEMORY")?;
            writeln!(out, "  mem.reads              {}", self.mem_reads)?;
            writeln!(out, "  mem.writes             {}", self.mem_writes)?;
            writeln!(out, "{RULE}")?;
        }
        if want("hazards") {
            writeln!(out, "HAZARDS")?;
            writeln!(
                out,
                "  bubbles                {} ({:.2}%)",
                self.bubbles,
                pct(self.bubbles)
            )?;
            writeln!(out, "  stalls.data            {}", self.stalls_data)?;
            writeln!(out, "  stalls.control         {}", self.stalls_control)?;
            writeln!(out, "  branches.taken         {}", self.branches_taken)?;
            writeln!(out, "  jumps                  {}", self.jumps)?;
            writeln!(out, "{RULE}")?;
        }
        Ok(())
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let mut report = String::new();
        if self.write_sections(&mut report, sections).is_ok() {
            print!("{report}");
        }
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sections(f, &[])
    }
}
