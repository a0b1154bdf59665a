//! Solves `sqrt(x) - cos(0.387x) = 0` on `[0, 1.5]` with the chord and
//! Newton methods and prints each iteration trace as a table.

use std::process::ExitCode;

use anyhow::Context;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use chord_newton::root_finding::chord::{chord, ChordCfg};
use chord_newton::root_finding::equation::SqrtCos;
use chord_newton::root_finding::format::RowFormatter;
use chord_newton::root_finding::newton::{newton, NewtonCfg};
use chord_newton::root_finding::report::RootFindingReport;
use chord_newton::root_finding::selector::select_newton_start;
use chord_newton::table;

const A: f64 = 0.0;
const B: f64 = 1.5;
const EPS: f64 = 0.001;

fn print_report(report: &RootFindingReport, formatter: &RowFormatter, eq: &SqrtCos) -> anyhow::Result<()> {
    let rows = formatter.table(eq, &report.trace);
    print!("{}", table::render(&rows)?);
    println!(
        "{}: root = {:.*} after {} iterations",
        report.algorithm_name,
        formatter.precision(),
        report.root,
        report.iterations,
    );
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let eq = SqrtCos::default();
    let formatter = RowFormatter::default();

    let chord_report = chord(&eq, A, B, ChordCfg::new().set_eps(EPS)?)
        .context("chord method failed")?;
    print_report(&chord_report, &formatter, &eq)?;
    println!();

    let x0 = select_newton_start(&eq, A, B)?;
    let newton_report = newton(&eq, x0, NewtonCfg::new().set_eps(EPS)?)
        .context("newton method failed")?;
    print_report(&newton_report, &formatter, &eq)?;

    Ok(())
}

fn main() -> ExitCode {
    let _ = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
