/// Ackermann Engine CLI
use ackermann_engine::{compute_recursive, Engine};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    eprintln!("ackermann v{}", VERSION);
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    ackermann [OPTIONS] <M> <N>");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -h, --help       Print this help message");
    eprintln!("    -v, --version    Print version information");
    eprintln!("    --check          Cross-validate against the recursive oracle");
    eprintln!("                     (small inputs only; the oracle recurses)");
    eprintln!("    --stats          Print engine statistics after evaluation");
    eprintln!();
    eprintln!("ARGUMENTS:");
    eprintln!("    <M> <N>          Natural-number arguments to A(m, n)");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    ackermann 3 3");
    eprintln!("    ackermann --check 2 4");
    eprintln!("    RUST_LOG=ackermann_engine=trace ackermann 2 2");
}

fn print_version() {
    println!("ackermann {}", VERSION);
}

struct Options {
    m: f64,
    n: f64,
    check: bool,
    stats: bool,
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();

    let mut positional: Vec<f64> = Vec::new();
    let mut check = false;
    let mut stats = false;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                process::exit(0);
            }
            "--check" => {
                check = true;
            }
            "--stats" => {
                stats = true;
            }
            arg if arg.starts_with("--") => {
                return Err(format!("Unknown option: {}", arg));
            }
            arg => {
                let value: f64 = arg
                    .parse()
                    .map_err(|_| format!("Not a number: {}", arg))?;
                positional.push(value);
            }
        }
        i += 1;
    }

    match positional.as_slice() {
        [m, n] => Ok(Options {
            m: *m,
            n: *n,
            check,
            stats,
        }),
        _ => Err("Expected exactly two arguments: <M> <N>".to_string()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    let mut engine = Engine::new();
    let value = match engine.try_compute(options.m, options.n) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    println!("A({}, {}) = {}", options.m, options.n, value);

    if options.check {
        let reference = compute_recursive(options.m, options.n);
        if reference == value {
            println!("oracle agrees: {}", reference);
        } else {
            eprintln!(
                "Error: oracle disagrees: engine {} vs recursive {}",
                value, reference
            );
            process::exit(1);
        }
    }

    if options.stats {
        let stats = engine.stats();
        println!(
            "steps: {} | max depth: {} | memo hits: {} | memo misses: {} | cached entries: {}",
            stats.steps, stats.max_depth, stats.memo_hits, stats.memo_misses, stats.resolved_entries
        );
    }
}
