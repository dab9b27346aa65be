/// Field extraction properties.
pub mod decode_properties;
/// Disassembly text for every format.
pub mod disasm;
