//! Execution statistics collection and reporting.
//!
//! This module tracks what the emulator executed. It provides:
//! 1. **Throughput:** Instructions retired and host-side instructions per second.
//! 2. **Instruction mix:** Counts by category (data, stack, branch, ALU, I/O).
//! 3. **Control flow:** Taken versus not-taken conditional jumps.

use std::time::Instant;

use crate::isa::instruction::InstructionClass;

/// Execution statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// Count of data-movement instructions (`LDI`, `LD`, `ST`, `NOP`, `HLT`).
    pub inst_data: u64,
    /// Count of `PUSH`/`POP`.
    pub inst_stack: u64,
    /// Count of `CALL`, `RET`, and jumps.
    pub inst_branch: u64,
    /// Count of ALU instructions.
    pub inst_alu: u64,
    /// Count of console output instructions.
    pub inst_io: u64,

    /// Conditional jumps that were taken.
    pub branches_taken: u64,
    /// Conditional jumps that fell through.
    pub branches_not_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_data: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_alu: 0,
            inst_io: 0,
            branches_taken: 0,
            branches_not_taken: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction of the given class.
    pub const fn retire(&mut self, class: InstructionClass) {
        self.instructions_retired += 1;
        match class {
            InstructionClass::Data => self.inst_data += 1,
            InstructionClass::Stack => self.inst_stack += 1,
            InstructionClass::Branch => self.inst_branch += 1,
            InstructionClass::Alu => self.inst_alu += 1,
            InstructionClass::Io => self.inst_io += 1,
        }
    }

    /// Records the outcome of a conditional jump.
    pub const fn record_branch(&mut self, taken: bool) {
        if taken {
            self.branches_taken += 1;
        } else {
            self.branches_not_taken += 1;
        }
    }

    /// Prints all statistics to stderr.
    ///
    /// Stderr keeps the report apart from program output on stdout.
    #[allow(clippy::cast_precision_loss)]
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;
        let ips = if seconds > 0.0 {
            self.instructions_retired as f64 / seconds
        } else {
            0.0
        };

        eprintln!("\n==========================================================");
        eprintln!("LS-8 EXECUTION STATISTICS");
        eprintln!("==========================================================");
        eprintln!("host_seconds             {seconds:.6} s");
        eprintln!("sim_insts                {}", self.instructions_retired);
        eprintln!("sim_ips                  {ips:.0}");
        eprintln!("----------------------------------------------------------");
        eprintln!("INSTRUCTION MIX");
        eprintln!("  op.data                {} ({:.2}%)", self.inst_data, pct(self.inst_data));
        eprintln!("  op.stack               {} ({:.2}%)", self.inst_stack, pct(self.inst_stack));
        eprintln!("  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch));
        eprintln!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        eprintln!("  op.io                  {} ({:.2}%)", self.inst_io, pct(self.inst_io));
        eprintln!("----------------------------------------------------------");
        eprintln!("CONDITIONAL JUMPS");
        eprintln!("  br.taken               {}", self.branches_taken);
        eprintln!("  br.not_taken           {}", self.branches_not_taken);
        eprintln!("==========================================================");
    }
}
