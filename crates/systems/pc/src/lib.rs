//! IBM PC/XT system support for the xt86 CPU core.
//!
//! This crate provides the machine side of the CPU's world: the 1 MiB
//! physical memory with the PC/XT RAM / mapped-adapter / ROM policy, the
//! per-page dirty bitmap consumed by display refresh, and the backing
//! store for the CPU's decoded-operation cache.
//!
//! Devices (timer, DMA, video, floppy, keyboard), the interrupt
//! controller and the event scheduler are expected to live in the outer
//! harness; they talk to the CPU exclusively through the traits exported
//! by `xt86_core`.

#![allow(clippy::upper_case_acronyms)]

mod memory;

pub use memory::{
    MemoryError, PcMemory, ADDR_MASK, MAP_BASE, MEM_SIZE, PAGE_COUNT, ROM_BASE, ROM_SIZE,
};
