//! Renders a reaction-diffusion pattern to a grayscale PNG, headless.
//!
//! Run from repo root:
//!   `cargo run -p mottle-snap`                     - 512x512, default params, out.png
//!   `cargo run -p mottle-snap -- --regime worms`   - named parameter regime
//!   `cargo run -p mottle-snap -- --size 800x600 --batches 400 --seed 7 --out worms.png`

use std::env;
use std::process;

use mottle_shade::Curve;
use mottle_sim::{Regime, SeedPolicy, Session};

struct Args {
    width: usize,
    height: usize,
    batches: u32,
    seed: Option<u64>,
    regime: Option<Regime>,
    out: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            batches: 200,
            seed: None,
            regime: None,
            out: "out.png".to_string(),
        }
    }
}

fn print_usage() {
    eprintln!("Usage: mottle-snap [options]");
    eprintln!("  --size WxH       grid size in cells (default 512x512)");
    eprintln!("  --batches N      batches to run before the snapshot (default 200)");
    eprintln!("  --seed N         fixed seed for reproducible runs (default: OS entropy)");
    eprintln!("  --regime NAME    parameter regime, one of:");
    for regime in Regime::ALL {
        eprintln!("                     {}", regime.name());
    }
    eprintln!("  --out FILE       output path (default out.png)");
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);

    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--size" => {
                let value = iter.next().ok_or("--size needs a WxH value")?;
                let (w, h) = value
                    .split_once('x')
                    .ok_or_else(|| format!("bad size '{value}', expected WxH"))?;
                args.width = w.parse().map_err(|_| format!("bad width '{w}'"))?;
                args.height = h.parse().map_err(|_| format!("bad height '{h}'"))?;
            }
            "--batches" => {
                let value = iter.next().ok_or("--batches needs a count")?;
                args.batches = value.parse().map_err(|_| format!("bad batch count '{value}'"))?;
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a number")?;
                args.seed = Some(value.parse().map_err(|_| format!("bad seed '{value}'"))?);
            }
            "--regime" => {
                let value = iter.next().ok_or("--regime needs a name")?;
                args.regime = Some(
                    Regime::from_name(&value).ok_or_else(|| format!("unknown regime '{value}'"))?,
                );
            }
            "--out" => {
                args.out = iter.next().ok_or("--out needs a path")?;
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("unknown flag '{other}'")),
        }
    }

    Ok(args)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };

    let policy = match args.seed {
        Some(seed) => SeedPolicy::Fixed(seed),
        None => SeedPolicy::Entropy,
    };
    let params = args.regime.map(|r| r.parameters()).unwrap_or_default();

    // Display parameters are checked before spending time on the simulation
    let curve = match Curve::try_from(&params) {
        Ok(curve) => curve,
        Err(err) => {
            eprintln!("bad display parameters: {err}");
            process::exit(1);
        }
    };

    let mut session = match Session::new(args.width, args.height, policy) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("failed to create session: {err}");
            process::exit(1);
        }
    };

    log::info!(
        "simulating {}x{} cells, {} batches of {} iterations",
        args.width,
        args.height,
        args.batches,
        params.iterations
    );
    for _ in 0..args.batches {
        session.advance(&params);
    }

    let image = curve.map(session.grid()).to_gray_image();
    if let Err(err) = image.save(&args.out) {
        eprintln!("failed to write {}: {err}", args.out);
        process::exit(1);
    }
    println!("wrote {} ({}x{})", args.out, args.width, args.height);
}
