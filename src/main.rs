//! # Consulta CNPJ Main Entry Point
//!
//! One-shot lookup: normalize and validate the argument, query the
//! registry, print the grouped rows or the error message.

use std::time::Instant;

use anyhow::Result;
use consulta_cnpj::cmd_args::CommandLineArgs;
use consulta_cnpj::{config, AppController};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CommandLineArgs::parse();
    let mut app = AppController::new();

    let normalized = app.input_changed(args.cnpj()).to_string();
    if args.verbose() {
        println!("CNPJ: {normalized}");
        println!("URL:  {}/{normalized}", config::get_api_base_url());
    }

    if app.submit() {
        app.wait_for_completion().await;
    }

    if let Some(error) = app.search().error() {
        eprintln!("Erro: {error}");
        std::process::exit(1);
    }

    let now = Instant::now();
    let feedback = app.feedback();
    for section in app.sections() {
        println!("{}", section.title);
        for row in &section.rows {
            println!("  {}: {}", row.label, row.presentation(feedback, now));
        }
        println!();
    }

    Ok(())
}
