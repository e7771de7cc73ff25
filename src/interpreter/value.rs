/// Runtime value definitions.
///
/// The `Value` enum, the kind tags used in error messages, hash-key
/// derivation for the hashable kinds, and the built-in function handle.
pub mod core;
/// Chained environments.
///
/// Name-to-value maps with an optional outer scope; lookup walks outward,
/// insertion is always local. Closures capture environments by shared
/// reference.
pub mod environment;
