//! CLI launcher: evaluate the `txt` output without a browser session.
//!
//! Usage:
//!   doubler-run            # evaluate at the declared default (20)
//!   doubler-run 42         # evaluate at n = 42
//!   doubler-run --sweep    # one line per value in the declared range
//!   doubler-run 42 -o out.txt
//!
//! If no output file is specified, writes to stdout.

use clap::Parser;
use doubler_rs::App;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "doubler-run", about = "Evaluate the doubler app's text output")]
struct Args {
    /// Slider value to evaluate (defaults to the declared default).
    n: Option<i64>,

    /// Print the output for every value in the declared range.
    #[arg(long, conflicts_with = "n")]
    sweep: bool,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("App setup error: {}", e);
            process::exit(1);
        }
    };

    let slider = &app.page.slider;
    let output_key = app.page.output.key;

    let text = if args.sweep {
        let mut lines = Vec::new();
        for n in slider.min..=slider.max {
            match app.render(output_key, n) {
                Ok(line) => lines.push(line),
                Err(e) => {
                    eprintln!("Render error at n={}: {}", n, e);
                    process::exit(1);
                }
            }
        }
        lines.join("\n")
    } else {
        let n = args.n.unwrap_or(slider.default);
        // The CLI injects values from outside the declared control, so
        // reject out-of-range rather than silently rewriting the argument.
        let n = match slider.check(n) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
        match app.render(output_key, n) {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Render error: {}", e);
                process::exit(1);
            }
        }
    };

    if let Some(out_path) = &args.output {
        if let Some(parent) = out_path.parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{}'", out_path.display());
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &text) {
            eprintln!("Error writing output file '{}': {}", out_path.display(), e);
            process::exit(1);
        }
        eprintln!("Wrote {}", out_path.display());
    } else {
        if let Err(e) = io::stdout().write_all(text.as_bytes()) {
            eprintln!("Error writing output: {}", e);
            process::exit(1);
        }
        if !text.is_empty() && !text.ends_with('\n') {
            println!();
        }
    }
}
