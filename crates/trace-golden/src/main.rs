// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! trace-golden binary entry point.

use tokio::io::AsyncWriteExt;

use trace_golden::cli::{Cli, Invocation};
use trace_golden::report::{print_error, print_warning, render_outcome};
use trace_golden::{exit_codes, logging, HarnessConfig, HarnessError, Runner};

#[tokio::main]
async fn main() {
    let cli = match Invocation::parse_from(std::env::args_os()) {
        Invocation::Run(cli) => cli,
        early => {
            let _ = early.write_to(&mut std::io::stdout(), &mut std::io::stderr());
            std::process::exit(early.exit_code().unwrap_or(exit_codes::FAILURE));
        }
    };

    logging::init(cli.verbose);

    let code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            print_error(e);
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}

async fn run(cli: &Cli) -> Result<i32, HarnessError> {
    let runner = Runner::new(HarnessConfig::resolve(cli)?);
    let mut stdout = tokio::io::stdout();

    if cli.generate {
        let generated = runner.generate(&mut stdout).await?;
        if !generated.status.success() {
            print_warning(format_args!(
                "trace tool exited with {}; golden file written anyway",
                generated.status
            ));
        }
        return Ok(exit_codes::SUCCESS);
    }

    let outcome = runner.compare(&mut stdout).await?;
    let text = render_outcome(&runner.config().label(), &outcome);
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(outcome.exit_code())
}
