//! Text view of the pipeline.
//!
//! Renders a snapshot after every cycle and, in step mode, waits for the user
//! between cycles. It performs:
//! 1. **Rendering:** Cycle, pc, pending bubbles, the four latches, and non-zero registers.
//! 2. **Stepping:** Enter advances one cycle, `q` quits, end of input interrupts the session.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use mipsim_core::isa::decode_to_text;
use mipsim_core::{Observer, Snapshot};

const SEPARATOR: &str = "----------------------------";

/// How a step-mode session ended early.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    /// The user typed `q`.
    Quit,
    /// Input closed or could not be read.
    Interrupted,
}

/// Observer that writes each cycle to `out` and reads step commands from `input`.
#[derive(Debug)]
pub struct TextView<R, W> {
    input: R,
    out: W,
    step: bool,
    quiet: bool,
    exit: Option<Exit>,
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> TextView<R, W> {
    /// Creates a view.
    ///
    /// # Arguments
    ///
    /// * `input` - Source of step commands; unused unless `step` is set.
    /// * `out` - Destination for rendered cycles.
    /// * `step` - Wait for a command after every cycle.
    /// * `quiet` - Skip per-cycle rendering.
    pub const fn new(input: R, out: W, step: bool, quiet: bool) -> Self {
        Self {
            input,
            out,
            step,
            quiet,
            exit: None,
            error: None,
        }
    }

    /// Why the session stopped early, if it did.
    pub const fn exit(&self) -> Option<Exit> {
        self.exit
    }

    /// Takes the first write error hit while rendering.
    pub const fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn render(&mut self, snap: &Snapshot<'_>) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "{SEPARATOR}")?;
        writeln!(
            out,
            "cycle {:<6} pc {:#010x}  insts {:<6} bubbles {}",
            snap.cycle(),
            snap.pc,
            snap.stats.instructions,
            snap.bubbles
        )?;

        let l = snap.latches;
        for (name, word) in [
            ("IF/ID", l.if_id.inst),
            ("ID/EX", l.id_ex.inst),
            ("EX/MEM", l.ex_mem.inst),
            ("MEM/WB", l.mem_wb.inst),
        ] {
            writeln!(out, "  {name:<7} {}", decode_to_text(word))?;
        }

        let live: Vec<String> = snap
            .regs
            .as_array()
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(i, &v)| format!("${i} = {}", v as i32))
            .collect();
        if live.is_empty() {
            writeln!(out, "  regs    (all zero)")?;
        } else {
            writeln!(out, "  regs    {}", live.join(", "))?;
        }
        if !snap.running {
            writeln!(out, "{SEPARATOR}")?;
            writeln!(out, "halted")?;
        }
        out.flush()
    }

    fn prompt(&mut self) -> io::Result<ControlFlow<Exit>> {
        write!(self.out, "[enter] step  [q] quit > ")?;
        self.out.flush()?;

        let mut line = String::new();
        let read = match self.input.read_line(&mut line) {
            Ok(n) => n,
            Err(_) => return Ok(ControlFlow::Break(Exit::Interrupted)),
        };
        if read == 0 {
            return Ok(ControlFlow::Break(Exit::Interrupted));
        }
        if line.trim().eq_ignore_ascii_case("q") {
            return Ok(ControlFlow::Break(Exit::Quit));
        }
        Ok(ControlFlow::Continue(()))
    }
}

impl<R: BufRead, W: Write> Observer for TextView<R, W> {
    fn on_cycle(&mut self, snap: &Snapshot<'_>) -> ControlFlow<()> {
        let shown = if self.quiet { Ok(()) } else { self.render(snap) };
        if let Err(e) = shown {
            self.error = Some(e);
            return ControlFlow::Break(());
        }
        if !self.step || !snap.running {
            return ControlFlow::Continue(());
        }
        match self.prompt() {
            Ok(ControlFlow::Continue(())) => ControlFlow::Continue(()),
            Ok(ControlFlow::Break(exit)) => {
                self.exit = Some(exit);
                ControlFlow::Break(())
            }
            Err(e) => {
                self.error = Some(e);
                ControlFlow::Break(())
            }
        }
    }
}
