//! CLI entry point for gather.

mod cli;

use std::io::{self, BufRead, Write};

use clap::Parser;
use gather::catalog::Catalog;
use gather::config::{load_config, Config};
use gather::error::AppError;
use gather::i18n::TranslationTable;
use gather::input::InputReader;
use gather::menu::Menu;
use gather::render::Renderer;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if let Some(locale) = &args.locale {
        config.locale.language = locale.clone();
    }
    if let Some(resources) = &args.resources {
        config.locale.resources = resources.clone();
    }
    if args.no_color {
        config.display.color = false;
    }

    let renderer = Renderer::new(config.display.color);
    init_tracing(&renderer);

    let mut reader = InputReader::stdio();
    let mut out = io::stdout();
    if let Err(e) = run(&config, &mut reader, &mut out) {
        renderer.error(&e.to_string());
        std::process::exit(1);
    }
}

/// Load the locale resources and drive the interactive menu loop.
fn run<R: BufRead, W: Write>(
    config: &Config,
    reader: &mut InputReader<R, W>,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let table = TranslationTable::load(&config.menu_translation_path())?;
    let catalog = Catalog::load(&config.catalog_path())?;
    let menu = Menu::new(&catalog, &catalog, table);

    menu.print_welcome(out)?;
    loop {
        menu.print_options(out)?;
        let choice = reader.read_integer(&menu.translations().text("choice"))?;
        match choice {
            // Absence (empty line or end of input) quits like an explicit 0.
            None | Some(0) => break,
            Some(1) => menu.print_fields(out)?,
            Some(_) => writeln!(out, "{}", menu.translations().text("invalidChoice"))?,
        }
    }
    menu.print_exit(out)?;
    Ok(())
}

fn init_tracing(renderer: &Renderer) {
    let filter = match std::env::var("GATHER_LOG") {
        Ok(raw) => match EnvFilter::try_new(&raw) {
            Ok(filter) => filter,
            Err(e) => {
                renderer.warn(&format!("ignoring invalid GATHER_LOG filter: {e}"));
                EnvFilter::new("warn")
            }
        },
        Err(_) => EnvFilter::new("warn"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
