// hal: lexer and parser front end with an interactive read loop

use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use hal::config::{self, Config, Mode};
use hal::parser::{Lexer, Parser, ParserOptions};
use hal::repl;
use hal::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "hal".to_string());

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", config::usage(&program_name));
            std::process::exit(2);
        }
    };

    match &config.mode {
        Mode::Help => {
            println!("{}", config::usage(&program_name));
            Ok(())
        }
        Mode::Repl(_) => run_repl(&config),
        Mode::File(path) => run_file(path, config.parser),
        Mode::Explorer(path) => run_explorer(path.as_deref(), config.parser),
    }
}

fn run_repl(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string());

    println!("Hi {}! Welcome to the hal programming language!", user);
    println!("Type in commands here:");

    let stdout = io::stdout();
    let mut options = config.repl_options();
    options.color = options.color && stdout.is_terminal();

    repl::start(io::stdin().lock(), stdout.lock(), options)?;
    Ok(())
}

fn run_file(path: &Path, options: ParserOptions) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        eprintln!("Error: File '{}' not found", path.display());
        std::process::exit(1);
    }

    let source = fs::read_to_string(path)?;

    eprintln!("Parsing {}...", path.display());
    let mut parser = Parser::with_options(Lexer::new(&source), options);
    let program = parser.parse_program();

    print!("{}", program);

    eprintln!(
        "Parsed {} statement(s) with {} diagnostic(s).",
        program.statements.len(),
        parser.errors().len()
    );
    for msg in parser.errors() {
        eprintln!("  {}", msg);
    }

    if !parser.errors().is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn run_explorer(
    path: Option<&Path>,
    options: ParserOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = match path {
        Some(path) => fs::read_to_string(path)?,
        None => String::new(),
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, options);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
