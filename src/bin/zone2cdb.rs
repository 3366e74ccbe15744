#![cfg(feature = "cli")]

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::arg;
use tracing_subscriber::EnvFilter;
use zone2cdb::compile;

fn main() -> ExitCode {
    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn run() -> Result<(), ()> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let app = clap::Command::new("zone2cdb")
        .about("Compile zone-style record data into cdbmake input on stdout")
        .arg(
            arg!([DATA] "Record data file to compile")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("data"),
        );

    let args = app.get_matches();
    let data: &PathBuf = args.get_one("DATA").expect("DATA has a default");

    match compile_to_stdout(data) {
        Ok(_) => Ok(()),
        Err(error) => {
            eprintln!("Error compiling {}:", data.display());
            eprintln!("{error}");
            Err(())
        }
    }
}

fn compile_to_stdout(data: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(data)?);
    let stdout = io::stdout();
    let mut sink = stdout.lock();
    compile(reader, &mut sink)?;
    sink.flush()?;
    Ok(())
}
