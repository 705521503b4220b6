//! Operations invoked by the CLI commands, kept free of clap so they can
//! be tested directly.

mod generate;

pub(crate) use generate::{GenerateOptions, GenerateReport, generate};
