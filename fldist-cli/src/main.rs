mod compare;

use anyhow::Result;
use clap::Command;
use env_logger::{Env, Target};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "fldist";
}

fn build_parser() -> Command {
    compare::cli::add_compare_args(
        Command::new(consts::BIN_NAME)
            .bin_name(consts::BIN_NAME)
            .version(consts::VERSION)
            .about("Plot the fragment length distribution of a reference, an original query and its rescaled output on one chart."),
    )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let app = build_parser();
    let matches = app.get_matches();

    compare::handlers::run_compare(&matches)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_runs_without_arguments() {
        let matches = build_parser().try_get_matches_from([consts::BIN_NAME]);
        assert!(matches.is_ok());
    }
}
