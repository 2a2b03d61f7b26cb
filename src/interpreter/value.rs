/// The runtime value type.
///
/// Defines the `Value` enum, conversions from literals, the assignment
/// conversion rules between declared types, and the printed representation.
pub mod core;
