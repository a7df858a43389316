//! CLI library components for the QLC wordlist toolkit.

pub mod logging;
