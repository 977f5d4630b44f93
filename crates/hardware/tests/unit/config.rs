//! # Configuration Tests
//!
//! Defaults, partial JSON documents, and their effect on a fresh CPU.

use crate::common::{ProgramBuilder, TestContext};
use ls8_core::config::{Config, GeneralConfig, MemoryConfig};
use pretty_assertions::assert_eq;

#[test]
fn defaults_match_reset_state() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.start_pc, 0);
    assert_eq!(config.memory.initial_sp, 0xF4);
}

#[test]
fn empty_document_is_default() {
    let config: Config = serde_json::from_str("{}").expect("valid JSON");
    assert_eq!(config, Config::default());
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config: Config =
        serde_json::from_str(r#"{ "general": { "start_pc": 16 } }"#).expect("valid JSON");
    assert_eq!(
        config,
        Config {
            general: GeneralConfig {
                trace_instructions: false,
                start_pc: 16,
            },
            memory: MemoryConfig::default(),
        }
    );
}

#[test]
fn wrong_type_is_rejected() {
    let result = serde_json::from_str::<Config>(r#"{ "memory": { "initial_sp": "high" } }"#);
    assert!(result.is_err());
}

#[test]
fn start_pc_sets_reset_vector() {
    let mut config = Config::default();
    config.general.start_pc = 4;
    let program = ProgramBuilder::new()
        .ldi(0, 1) // skipped
        .nop()
        .ldi(0, 9)
        .prn(0)
        .hlt()
        .build();
    let mut ctx = TestContext::with_config(&config).load(&program);
    assert_eq!(ctx.cpu.pc, 4);
    ctx.run().expect("runs to HLT");
    assert_eq!(ctx.output(), "9\n");

    ctx.cpu.reset();
    assert_eq!(ctx.cpu.pc, 4);
}

#[test]
fn initial_sp_moves_the_stack() {
    let mut config = Config::default();
    config.memory.initial_sp = 0x80;
    let ctx = TestContext::with_config(&config);
    assert_eq!(ctx.cpu.regs.sp(), 0x80);
    assert_eq!(ctx.cpu.stack_base(), 0x80);
}

#[test]
fn trace_switch_reaches_cpu() {
    let mut config = Config::default();
    config.general.trace_instructions = true;
    assert!(TestContext::with_config(&config).cpu.trace);
}
