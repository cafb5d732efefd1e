use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build, verification and benchmark automation for jitbits-core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the iai-callgrind instruction-count benchmarks
    Bench {
        /// Popcount strategy to compile in
        #[arg(long, short, value_enum, default_value_t = Strategy::Detect)]
        strategy: Strategy,

        /// Pin the benchmark process to a specific CPU core (using taskset)
        #[arg(long, short = 'p')]
        pin_core: Option<usize>,
    },
    /// Runs the test suite once per popcount strategy
    TestAll,
    /// Runs the Kani proofs
    Kani {
        /// Run a single proof harness
        #[arg(long)]
        harness: Option<String>,
    },
    /// Checks compilation for all supported targets
    CheckAll,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Strategy {
    /// Probe POPCNT at runtime
    Detect,
    /// Compile with `-C target-feature=+popcnt`
    Hardware,
    /// Force the per-byte table (`portable-popcount` feature)
    Table,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    match cli.command {
        Commands::Bench { strategy, pin_core } => {
            run_bench(&sh, strategy, pin_core)?;
        }
        Commands::TestAll => {
            test_all(&sh)?;
        }
        Commands::Kani { harness } => {
            run_kani(&sh, harness)?;
        }
        Commands::CheckAll => {
            check_all(&sh)?;
        }
    }

    Ok(())
}

fn run_bench(sh: &Shell, strategy: Strategy, pin_core: Option<usize>) -> Result<()> {
    if cmd!(sh, "valgrind --version").read().is_err() {
        return Err(anyhow::anyhow!(
            "valgrind not found; iai-callgrind benchmarks need it on PATH"
        ));
    }
    ensure_iai_runner(sh)?;

    let prefix = match pin_core {
        Some(c) => {
            println!(">> Pinned to core {}", c);
            format!("taskset -c {} ", c)
        }
        None => String::new(),
    };

    let (rust_flags, features) = strategy_flags(strategy);
    let _env = sh.push_env("RUSTFLAGS", rust_flags);

    println!(">> Benchmarking jitbits-core ({})...", strategy_name(strategy));
    let cmd_str = format!(
        "{}cargo bench -p jitbits-core --bench primitives {}",
        prefix, features
    );
    cmd!(sh, "bash -c {cmd_str}").run()?;
    Ok(())
}

fn test_all(sh: &Shell) -> Result<()> {
    for strategy in [Strategy::Detect, Strategy::Hardware, Strategy::Table] {
        if strategy == Strategy::Hardware && !host_has_popcnt(sh) {
            println!("!! Host lacks POPCNT. Skipping the hardware build.");
            continue;
        }
        println!("--- Testing ({}) ---", strategy_name(strategy));
        let (rust_flags, features) = strategy_flags(strategy);
        let _env = sh.push_env("RUSTFLAGS", rust_flags);
        let cmd_str = format!("cargo test -p jitbits-core {}", features);
        cmd!(sh, "bash -c {cmd_str}").run()?;
    }
    println!(">> All strategies passed.");
    Ok(())
}

fn run_kani(sh: &Shell, harness: Option<String>) -> Result<()> {
    if cmd!(sh, "cargo kani --version").read().is_err() {
        println!("!! 'kani-verifier' is not installed. Installing via cargo...");
        cmd!(sh, "cargo install --locked kani-verifier").run()?;
        cmd!(sh, "cargo kani setup").run()?;
    }

    match harness {
        Some(h) => cmd!(sh, "cargo kani --package jitbits-core --harness {h}").run()?,
        None => cmd!(sh, "cargo kani --package jitbits-core").run()?,
    }
    Ok(())
}

fn check_all(sh: &Shell) -> Result<()> {
    // Assume running from project root
    ensure_cross(sh)?;

    println!("--- Checking x86-64 (baseline, runtime probe) ---");
    {
        let _env = sh.push_env("RUSTFLAGS", "-C target-cpu=x86-64");
        cmd!(sh, "cargo check -p jitbits-core --examples --release").run()?;
    }

    println!("--- Checking x86-64 (portable-popcount) ---");
    cmd!(
        sh,
        "cargo check -p jitbits-core --examples --release --features portable-popcount"
    )
    .run()?;

    println!("--- Checking Aarch64 ---");
    cmd!(
        sh,
        "cross check --target aarch64-unknown-linux-gnu -p jitbits-core --examples --release"
    )
    .run()?;

    println!("--- Checking Armv7r (no_std) ---");
    ensure_target(sh, "armv7r-none-eabi")?;
    cmd!(
        sh,
        "cargo check --target armv7r-none-eabi -p jitbits-core --lib --release"
    )
    .run()?;

    println!("--- Checking Wasm32 ---");
    ensure_target(sh, "wasm32-unknown-unknown")?;
    cmd!(
        sh,
        "cargo check --target wasm32-unknown-unknown -p jitbits-core --lib --release"
    )
    .run()?;

    println!(">> All targets checked successfully.");
    Ok(())
}

fn strategy_flags(strategy: Strategy) -> (&'static str, &'static str) {
    match strategy {
        Strategy::Detect => ("-C target-cpu=x86-64", ""),
        Strategy::Hardware => ("-C target-feature=+popcnt", ""),
        Strategy::Table => ("", "--features portable-popcount"),
    }
}

fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Detect => "runtime probe",
        Strategy::Hardware => "hardware POPCNT",
        Strategy::Table => "byte table",
    }
}

fn host_has_popcnt(sh: &Shell) -> bool {
    cmd!(sh, "grep -q -w popcnt /proc/cpuinfo")
        .quiet()
        .run()
        .is_ok()
}

fn ensure_iai_runner(sh: &Shell) -> Result<()> {
    if cmd!(sh, "iai-callgrind-runner --version").read().is_err() {
        println!("!! 'iai-callgrind-runner' is not installed. Installing via cargo...");
        cmd!(sh, "cargo install iai-callgrind-runner --version 0.14.0").run()?;
    }
    Ok(())
}

fn ensure_cross(sh: &Shell) -> Result<()> {
    if cmd!(sh, "cross --version").read().is_err() {
        println!("!! 'cross' is not installed. Installing via cargo...");
        cmd!(sh, "cargo install cross").run()?;
    }
    Ok(())
}

fn ensure_target(sh: &Shell, target: &str) -> Result<()> {
    let output = cmd!(sh, "rustup target list --installed").read()?;
    if !output.contains(target) {
        println!("!! Target '{}' not found. Installing via rustup...", target);
        cmd!(sh, "rustup target add {target}").run()?;
    }
    Ok(())
}
