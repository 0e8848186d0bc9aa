//! Core emulator primitives and traits.
//!
//! This crate provides the reusable 8086/8088 CPU core ([`cpu_8086`]) and
//! the machine-level traits that tie a CPU to the rest of an emulated
//! system: the event [`Scheduler`], the [`IoPorts`] dispatcher and the
//! [`InterruptController`]. Systems implement these traits and wire their
//! implementations into the CPU; the CPU never talks to concrete devices.

pub mod cpu_8086;
pub mod logging;

/// Scheduler ticks per second of simulated time.
///
/// All time reported through [`Scheduler`] is expressed in these ticks
/// (nanoseconds). Cycle-to-time conversion in the CPU carries the division
/// remainder between runs, so the tick rate does not need to be a multiple
/// of the CPU clock.
pub const CLOCKRATE: u64 = 1_000_000_000;

/// Cycle-driven event scheduler consumed by the CPU.
///
/// The CPU asks how long it may run before a device event is due, executes
/// at most that many cycles, and reports the simulated time it consumed.
pub trait Scheduler {
    /// Upper bound, in [`CLOCKRATE`] ticks, on how long the CPU may run
    /// before the next scheduled device event.
    fn time_to_next_event(&self) -> u64;

    /// Report elapsed simulated time in [`CLOCKRATE`] ticks.
    fn advance_time(&mut self, ticks: u64);
}

/// I/O port dispatcher consumed by the CPU for IN/OUT instructions.
///
/// Only byte-wide access is required; the word-wide defaults compose two
/// byte accesses on `port` and `port + 1`, which matches how the 8088 bus
/// performed word I/O.
pub trait IoPorts {
    /// Read a byte from an I/O port.
    fn inb(&mut self, port: u16) -> u8;

    /// Write a byte to an I/O port.
    fn outb(&mut self, v: u8, port: u16);

    /// Read a word from an I/O port.
    fn inw(&mut self, port: u16) -> u16 {
        let lo = self.inb(port) as u16;
        let hi = self.inb(port.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Write a word to an I/O port.
    fn outw(&mut self, v: u16, port: u16) {
        self.outb((v & 0xFF) as u8, port);
        self.outb((v >> 8) as u8, port.wrapping_add(1));
    }
}

/// Programmable interrupt controller interface consumed by the CPU.
///
/// An implementation accumulates and serializes interrupt signals from
/// devices and hands vectors to the CPU at instruction boundaries.
pub trait InterruptController {
    /// Poll for a pending interrupt request.
    ///
    /// Returns the vector number, or `None` if no interrupt is pending.
    /// A `Some` return also serves as the acknowledgement: the complete
    /// INTR/INTA handshake and vector transfer is this single call.
    fn get_pending_interrupt(&mut self) -> Option<u8>;
}
