// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;
extern crate mandelbrot;

use clap::{App, Arg, ArgMatches};
use failure::Error;
use mandelbrot::planes::Dimension;
use mandelbrot::MandelbrotRenderer;
use std::fs::File;
use std::io::{self, BufWriter};
use std::str::FromStr;
use std::time::Instant;

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_size(s: &str) -> Result<(), String> {
    match usize::from_str(s) {
        Ok(size) => Dimension::new(size)
            .map(|_| ())
            .map_err(|e| e.to_string()),
        Err(_) => Err("Could not parse output image size".to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const THREADS: &str = "threads";
const STDOUT: &str = "-";
const MAX_THREADS: usize = 1024;

fn args<'a>(default_threads: &'a str) -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot renderer producing binary PBM bitmaps")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value(STDOUT)
                .help("Output file, or - for standard output"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("16000")
                .validator(|s| validate_size(&s))
                .help("Width and height of the output image; a multiple of 8"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value(default_threads)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        MAX_THREADS,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", MAX_THREADS),
                    )
                })
                .help("Number of threads to use in solver"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let size = usize::from_str(matches.value_of(SIZE).unwrap_or_default())?;
    let threads = usize::from_str(matches.value_of(THREADS).unwrap_or_default())?;
    let output = matches.value_of(OUTPUT).unwrap_or(STDOUT);

    let started = Instant::now();
    let renderer = MandelbrotRenderer::new(size)?;
    let bitmap = renderer.render(threads);
    info!(
        "rendered {}x{} with {} threads in {:?}; {} pixels in the set",
        bitmap.width(),
        bitmap.height(),
        threads,
        started.elapsed(),
        bitmap.member_count()
    );

    if output == STDOUT {
        let stdout = io::stdout();
        bitmap.write_to(stdout.lock())?;
    } else {
        bitmap.write_to(BufWriter::new(File::create(output)?))?;
        info!("wrote {}", output);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let default_threads = mandelbrot::default_pool_size()
        .min(MAX_THREADS)
        .to_string();
    let matches = args(&default_threads);

    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
