// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Compensated Evaluation CLI
//!
//! Evaluates polynomials in Bernstein or monomial form at a list of parameters, printing the
//! plain value, the compensated expansion and, on request, forward errors measured against
//! exact rational arithmetic.

use anyhow::{ensure, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use kfold_casteljau::condition::{basic_error_bound, compensated_error_bound};
use kfold_casteljau::{exact, horner, two_prod, two_sum, BernsteinPolynomial};
use tracing::{info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Evaluate polynomials with K-fold compensated de Casteljau and Horner schemes."
)]
struct Cli {
    /// Log level for diagnostics written to stderr
    #[arg(long, global = true, default_value_t = Level::WARN)]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a polynomial at one or more parameters
    Eval(EvalArgs),
    /// Apply an error-free transformation to two doubles
    Eft(EftArgs),
}

#[derive(Args, Debug, Clone)]
struct EvalArgs {
    /// Coefficients, comma separated (Bernstein: b_0..b_n, monomial: a_n..a_0)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    coeffs: Vec<f64>,

    /// Evaluation parameters, comma separated
    #[arg(
        long = "s",
        value_delimiter = ',',
        allow_hyphen_values = true,
        required = true
    )]
    params: Vec<f64>,

    /// Compensation order K
    #[arg(long, default_value_t = 2usize)]
    order: usize,

    /// Basis the coefficients are expressed in
    #[arg(long, value_enum, default_value_t = Basis::Bernstein)]
    basis: Basis,

    /// Report forward errors against exact rational arithmetic
    #[arg(long, default_value_t = false)]
    exact: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Basis {
    Bernstein,
    Monomial,
}

#[derive(Args, Debug, Clone)]
struct EftArgs {
    /// Operation to transform
    #[arg(long, value_enum)]
    op: EftOp,

    /// First operand
    #[arg(allow_hyphen_values = true)]
    a: f64,

    /// Second operand
    #[arg(allow_hyphen_values = true)]
    b: f64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum EftOp {
    Sum,
    Prod,
}

fn setup_simple_tracing(log_level: Level) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_simple_tracing(cli.log_level);

    match cli.command {
        Command::Eval(args) => match args.basis {
            Basis::Bernstein => eval_bernstein(&args),
            Basis::Monomial => eval_monomial(&args),
        },
        Command::Eft(args) => eft(&args),
    }
}

fn eval_bernstein(args: &EvalArgs) -> Result<()> {
    ensure!(args.order >= 1, "order must be at least 1");
    let poly = BernsteinPolynomial::new(args.coeffs.clone())?;
    info!(degree = poly.degree(), order = args.order, "evaluating Bernstein form");

    println!("p(s) = {poly}");
    println!("{}", "=".repeat(60));

    for &s in &args.params {
        let plain = poly.evaluate(s);
        let expansion = poly.evaluate_compensated(s, args.order)?;
        let compressed = expansion.compress(args.order)?;

        println!("s = {s:e}");
        println!("  basic        = {plain:e}");
        println!("  expansion    = {expansion}");
        println!("  compressed   = {compressed:e}");

        if args.exact {
            let reference = exact::de_casteljau(s, poly.coefficients())?;
            let cond = poly.condition_number(s);
            let plain_err = exact::relative_error(&exact::to_rational(plain)?, &reference);
            let expansion_err =
                exact::relative_error(&exact::expansion_sum(expansion.terms())?, &reference);
            let compressed_err =
                exact::relative_error(&exact::to_rational(compressed)?, &reference);

            println!("  cond         = {cond:e}");
            println!(
                "  rel. error   = {plain_err:e} (basic, a priori ≤ {:e})",
                basic_error_bound(poly.degree(), cond)
            );
            if args.order == 2 {
                println!(
                    "  rel. error   = {expansion_err:e} (expansion, a priori ≤ {:e})",
                    compensated_error_bound(poly.degree(), cond)
                );
            } else {
                println!("  rel. error   = {expansion_err:e} (expansion)");
            }
            println!("  rel. error   = {compressed_err:e} (compressed)");
        }
        println!("{}", "*".repeat(30));
    }

    Ok(())
}

fn eval_monomial(args: &EvalArgs) -> Result<()> {
    info!(
        degree = args.coeffs.len().saturating_sub(1),
        order = args.order,
        "evaluating monomial form"
    );

    for &x in &args.params {
        let plain = horner::basic(x, &args.coeffs)?;
        let compensated = horner::compensated(x, &args.coeffs, args.order)?;

        println!("x = {x:e}");
        println!("  basic        = {plain:e}");
        println!("  compensated  = {compensated:e}");

        if args.exact {
            let reference = exact::horner(x, &args.coeffs)?;
            let plain_err = exact::relative_error(&exact::to_rational(plain)?, &reference);
            let compensated_err =
                exact::relative_error(&exact::to_rational(compensated)?, &reference);
            println!("  rel. error   = {plain_err:e} (basic)");
            println!("  rel. error   = {compensated_err:e} (compensated)");
        }
        println!("{}", "*".repeat(30));
    }

    Ok(())
}

fn eft(args: &EftArgs) -> Result<()> {
    let a = exact::to_rational(args.a)?;
    let b = exact::to_rational(args.b)?;

    let (value, err, expected) = match args.op {
        EftOp::Sum => {
            let (sum, err) = two_sum(args.a, args.b);
            println!("two_sum({:e}, {:e}) = S + sigma, where", args.a, args.b);
            (sum, err, a + b)
        }
        EftOp::Prod => {
            let (product, err) = two_prod(args.a, args.b);
            println!("two_prod({:e}, {:e}) = P + pi, where", args.a, args.b);
            (product, err, a * b)
        }
    };

    println!("  rounded  = {value:e}");
    println!("  error    = {err:e}");

    let recombined = exact::to_rational(value)? + exact::to_rational(err)?;
    if recombined == expected {
        println!("✓ Error-free: rounded + error equals the exact result");
    } else {
        println!("✗ Not error-free (overflow or underflow in the operands)");
    }

    Ok(())
}
