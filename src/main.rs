use std::{fs, io, process::ExitCode, rc::Rc};

use clap::{CommandFactory, Parser as ArgParser};
use gorb::{
    interpreter::{lexer::lex, parser::core::Parser, value::environment::Environment},
    run,
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// gorb is a small expression-oriented scripting language with closures,
/// arrays and hash maps.
#[derive(ArgParser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// `version`, `help`, or a path to a `.gorb` script. Starts the REPL
    /// when omitted.
    target: Option<String>,

    /// Enter the REPL after the script has run, keeping its bindings.
    #[arg(short, long)]
    interactive: bool,

    /// Dump the token stream before parsing.
    #[arg(short, long)]
    tokens: bool,

    /// Dump the parsed program before evaluation.
    #[arg(short, long)]
    ast: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.target.as_deref() {
        Some("version") => {
            println!("gorb {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        },
        Some("help") => {
            let _ = Args::command().print_help();
            ExitCode::SUCCESS
        },
        Some(path) => execute_file(path, &args),
        None => repl(&args, &Environment::new()),
    }
}

/// Runs a script file. A script that reports a user-level error still
/// exits 0; only host-level failures (unreadable file, wrong extension)
/// are nonzero.
fn execute_file(path: &str, args: &Args) -> ExitCode {
    if !path.ends_with(".gorb") {
        eprintln!("not a gorb script: {path}");
        return ExitCode::FAILURE;
    }

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("can't read file: {path}");
            eprintln!("{error}");
            return ExitCode::FAILURE;
        },
    };

    dump(&source, Some(path), args);

    let env = Environment::new();
    match run(&source, Some(path), &env, &mut io::stdout()) {
        Ok(_) => {
            println!();
            if args.interactive {
                return repl(args, &env);
            }
        },
        Err(error) => {
            println!();
            println!("{error}");
        },
    }

    ExitCode::SUCCESS
}

/// The read-eval-print loop. Bindings persist across lines in `env`; the
/// line `exit`, Ctrl-C or Ctrl-D ends the session.
fn repl(args: &Args, env: &Rc<Environment>) -> ExitCode {
    println!("welcome to gorb.");

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("can't start line editor: {error}");
            return ExitCode::FAILURE;
        },
    };

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim() == "exit" {
                    break;
                }
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);

                dump(&line, None, args);
                match run(&line, None, env, &mut io::stdout()) {
                    Ok(value) => println!("{value}"),
                    Err(error) => println!("{error}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("{error}");
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}

/// Prints the debug dumps requested on the command line: the token stream
/// and the parsed program's canonical form.
fn dump(source: &str, file: Option<&str>, args: &Args) {
    if args.tokens {
        for token in lex(source, file) {
            println!("{token}");
        }
    }

    if args.ast {
        let mut parser = Parser::new(lex(source, file));
        let program = parser.parse_program();
        if parser.errors().is_empty() {
            println!("{program}");
        }
    }
}
