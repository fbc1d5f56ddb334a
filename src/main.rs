mod diagnostic;
mod input;
mod render;

use diagnostic::print_diagnostic;
use framegen_core::{generate_frames, Trainer, DEFAULT_FRAME_COUNT};
use input::InputError;
use std::env;

fn usage(program: &str) {
    eprintln!(
        "Usage: {} [--name <text>] [--tid <n>] [--sid <n>] [--seed <dec|0xHEX>] [--frames <n>] [--json]",
        program
    );
    eprintln!("Values not supplied as flags are prompted for on stdin.");
}

/// Returns the value following a flag, or exits with usage if it is missing.
fn flag_value<'a>(args: &'a [String], index: usize) -> &'a str {
    match args.get(index + 1) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("{} requires a value", args[index]);
            usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), InputError> {
    let args: Vec<String> = env::args().collect();

    let mut name: Option<String> = None;
    let mut tid: Option<u32> = None;
    let mut sid: Option<u32> = None;
    let mut seed: Option<u32> = None;
    let mut frames = DEFAULT_FRAME_COUNT;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--name" => {
                name = Some(flag_value(&args, i).to_string());
                i += 2;
            }
            "--tid" => {
                tid = Some(input::parse_id("tid", flag_value(&args, i))?);
                i += 2;
            }
            "--sid" => {
                sid = Some(input::parse_id("sid", flag_value(&args, i))?);
                i += 2;
            }
            "--seed" => {
                seed = Some(input::parse_seed(flag_value(&args, i))?);
                i += 2;
            }
            "--frames" => {
                frames = input::parse_frame_count(flag_value(&args, i))?;
                i += 2;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            unknown => {
                eprintln!("Unknown flag: {}", unknown);
                usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    // Anything not covered by a flag is collected interactively.
    let name = match name {
        Some(value) => value,
        None => input::prompt_line("Trainer name", "name")?,
    };
    let tid = match tid {
        Some(value) => value,
        None => input::parse_id("tid", &input::prompt_line("Trainer ID (TID)", "tid")?)?,
    };
    let sid = match sid {
        Some(value) => value,
        None => input::parse_id("sid", &input::prompt_line("Secret ID (SID)", "sid")?)?,
    };
    let seed = match seed {
        Some(value) => value,
        None => input::parse_seed(&input::prompt_line(
            "Initial RNG seed (hex or decimal)",
            "seed",
        )?)?,
    };

    let trainer = Trainer::new(name, tid, sid);
    let results = generate_frames(seed, &trainer, frames);

    if json {
        render::print_json(&trainer, seed, &results);
    } else {
        render::print_report(&trainer, seed, &results);
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        print_diagnostic(&err.diagnostic());
        std::process::exit(1);
    }
}
