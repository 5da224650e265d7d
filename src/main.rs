//! container-get CLI - read a value out of a JSON document by key path

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use container_get::cli::Args;
use container_get::{format_output, logging, ContainerAccessor, ContainerGetError, OutputFormat};
use serde_json::Value;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        let code = match e.downcast_ref::<ContainerGetError>() {
            Some(err) if err.is_not_found() => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let document = read_document(args)?;

    let path = args.keys.iter().map(|k| Value::String(k.clone()));
    let value = ContainerAccessor::new().get_path(&document, path)?;

    let format = if args.json { OutputFormat::Json } else { OutputFormat::Human };
    println!("{}", format_output(&value, &format));
    Ok(())
}

fn read_document(args: &Args) -> anyhow::Result<Value> {
    let content = if args.reads_stdin() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?
    };

    serde_json::from_str(&content).context("Document is not valid JSON")
}
