pub mod analyzers;
pub mod output;
pub mod parser;
pub mod roster;
pub mod shell;
pub mod stats;
