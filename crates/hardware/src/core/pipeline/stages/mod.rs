//! Pipeline stage implementations.
//!
//! Each stage reads the previous cycle's latches and mutates the CPU state in
//! place. The driver calls them in the order WB, IF, ID, EX, MEM:
//! 1. **Writeback:** Commits results to the register file before anything reads it.
//! 2. **Fetch:** Applies redirects, fetches the next word or injects a bubble.
//! 3. **Decode:** Detects hazards, derives control signals, and reads operands.
//! 4. **Execute:** Runs the ALU and computes branch and jump targets.
//! 5. **Memory:** Loads or stores one word of data memory.

/// ID: hazard checks, cancellation, control signals, operand read.
pub mod decode;
/// EX: operand mux, ALU, target addresses.
pub mod execute;
/// IF: redirect, fetch, bubble injection.
pub mod fetch;
/// MEM: word loads and stores.
pub mod memory;
/// WB: register file update.
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;
