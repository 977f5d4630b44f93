//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! entire LS-8 machine state. It coordinates the following:
//! 1. **State Management:** Memory, registers, flags, program counter, and the running flag.
//! 2. **Program Loading:** Copying a program image into memory before execution.
//! 3. **Observability:** The LS-8 trace line and fatal-fault state dumps.
//! 4. **Console:** The output sink written by `PRN` and `PRA`.

/// Fetch-decode-execute loop and instruction handlers.
pub mod execution;

/// Register, memory, and stack access with fault checking.
pub mod memory;

use std::fmt::Write as _;
use std::io::{self, Stdout, Write};

use tracing::debug;

use crate::common::constants::MEMORY_SIZE;
use crate::common::{Flags, LoadError, RegisterFile};
use crate::config::Config;
use crate::core::arch::ram::Ram;
use crate::isa::disasm;
use crate::stats::SimStats;

/// Main CPU structure containing all machine state.
///
/// The CPU is generic over its console so that program output can be sent to
/// stdout (the default) or captured in any [`Write`] sink.
#[derive(Debug)]
pub struct Cpu<W: Write = Stdout> {
    /// Main memory.
    pub ram: Ram,
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: RegisterFile,
    /// Flags register.
    pub flags: Flags,
    /// Program counter.
    pub pc: usize,
    /// Instruction register: the opcode most recently fetched.
    pub ir: u8,
    /// True while the execute loop should keep fetching.
    pub running: bool,
    /// Print a trace line to stderr before each instruction.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
    stack_base: u8,
    stack_depth: usize,
    start_pc: u8,
    console: W,
}

impl Cpu {
    /// Creates a CPU whose console is stdout.
    pub fn new(config: &Config) -> Self {
        Self::with_console(config, io::stdout())
    }
}

impl<W: Write> Cpu<W> {
    /// Creates a CPU in its reset state writing console output to `console`.
    ///
    /// # Arguments
    ///
    /// * `config` - Reset vector, stack base, and trace setting.
    /// * `console` - Sink for `PRN`/`PRA` output.
    pub fn with_console(config: &Config, console: W) -> Self {
        let stack_base = config.memory.initial_sp;
        let start_pc = config.general.start_pc;
        Self {
            ram: Ram::new(),
            regs: RegisterFile::with_stack_pointer(stack_base),
            flags: Flags::default(),
            pc: start_pc as usize,
            ir: 0,
            running: false,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            stack_base,
            stack_depth: 0,
            start_pc,
            console,
        }
    }

    /// Returns the console sink.
    pub const fn console(&self) -> &W {
        &self.console
    }

    /// Consumes the CPU, returning the console sink.
    pub fn into_console(self) -> W {
        self.console
    }

    /// Reset value of the stack pointer.
    pub const fn stack_base(&self) -> u8 {
        self.stack_base
    }

    /// Bytes pushed and not yet popped.
    pub const fn stack_depth(&self) -> usize {
        self.stack_depth
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Returns
    ///
    /// The number of bytes written. Memory is untouched on error.
    pub fn load_program(&mut self, image: &[u8]) -> Result<usize, LoadError> {
        if image.is_empty() {
            return Err(LoadError::EmptyProgram);
        }
        if !self.ram.load_image(image) {
            return Err(LoadError::ProgramTooLarge {
                len: image.len(),
                max: MEMORY_SIZE,
            });
        }
        debug!(bytes = image.len(), "program loaded");
        Ok(image.len())
    }

    /// Returns registers, flags, and PC to their reset values. Memory is kept.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::with_stack_pointer(self.stack_base);
        self.stack_depth = 0;
        self.flags = Flags::default();
        self.pc = self.start_pc as usize;
        self.ir = 0;
        self.running = false;
        self.stats = SimStats::default();
    }

    /// Formats the LS-8 trace line for the current state.
    ///
    /// Layout: `TRACE: PC | IR A B | R0 R1 R2 R3 R4 R5 R6 R7`, all hex.
    /// Bytes beyond memory read as `00`; this never faults.
    pub fn trace_line(&self) -> String {
        let at = |addr: usize| self.ram.read(addr).unwrap_or(0);
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            at(self.pc),
            at(self.pc + 1),
            at(self.pc + 2)
        );
        for r in self.regs.as_array() {
            let _ = write!(line, " {r:02X}");
        }
        line
    }

    /// Dumps machine state to stderr after a fatal fault.
    pub fn dump_state(&self) {
        let window = self.ram.slice(self.pc..self.pc + 3);
        eprintln!(
            "PC={:#04x}  IR={:#04x}  FL={:#010b}  [{}]",
            self.pc,
            self.ir,
            self.flags.bits(),
            disasm::disassemble(window)
        );
        self.regs.dump();
        let sp = self.regs.sp() as usize;
        let stack = self.ram.slice(sp..sp + self.stack_depth);
        if !stack.is_empty() {
            eprintln!("stack (top first): {stack:02X?}");
        }
    }
}
