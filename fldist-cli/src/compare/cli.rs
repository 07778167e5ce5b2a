use clap::{Command, arg};

pub const CONFIG_ARG: &str = "config";
pub const REFERENCE_ARG: &str = "reference";
pub const QUERY_ARG: &str = "query";
pub const OUTPUT_ARG: &str = "output";
pub const IMAGE_ARG: &str = "image";

///
/// Every argument is optional: with none the run uses the default file names
/// in the working directory.
pub fn add_compare_args(command: Command) -> Command {
    command
        .arg(
            arg!(--config <CONFIG>)
                .required(false)
                .help("Path to a TOML file describing datasets and plot settings"),
        )
        .arg(
            arg!(--reference <REFERENCE>)
                .required(false)
                .help("Reference histogram (`<length> <probability>` per line)"),
        )
        .arg(
            arg!(--query <QUERY>)
                .required(false)
                .help("Original query intervals, gzip compressed BED-like file"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Rescaled output intervals, plain BED-like file"),
        )
        .arg(
            arg!(--image <IMAGE>)
                .required(false)
                .help("Path of the PNG to write"),
        )
}
