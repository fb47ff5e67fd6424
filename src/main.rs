// lisplet - A small Lisp interpreter written in Rust
// Copyright (c) 2025 The lisplet authors. MIT licensed.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use lisplet_core::{Env, eval, register_builtins};
use lisplet_parser::Parser;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle --version flag
    if args.len() == 2 && (args[1] == "--version" || args[1] == "-v") {
        println!("lisplet v0.1.0");
        return;
    }

    // Create the global environment with builtins
    let env = Env::new();
    register_builtins(&env);

    // If files provided, evaluate them; otherwise start the REPL
    if args.len() > 1 {
        run_files(&args[1..], &env);
    } else {
        run_repl(&env);
    }
}

/// Evaluate a sequence of source files
fn run_files(files: &[String], env: &Env) {
    for file_path in files {
        if let Err(e) = eval_file(file_path, env) {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Evaluate a single source file
fn eval_file(file_path: &str, env: &Env) -> Result<(), String> {
    let path = Path::new(file_path);

    // Validate file extension
    match path.extension().and_then(|e| e.to_str()) {
        Some("lsp") | Some("lisp") => {}
        Some(ext) => {
            return Err(format!(
                "Error: unsupported file extension '.{}' for '{}'",
                ext, file_path
            ));
        }
        None => {
            return Err(format!(
                "Error: file '{}' has no extension (expected .lsp or .lisp)",
                file_path
            ));
        }
    }

    // Read and evaluate the file
    let source =
        fs::read_to_string(path).map_err(|e| format!("Error reading '{}': {}", file_path, e))?;

    let mut parser =
        Parser::new(&source).map_err(|e| format!("Parse error in '{}': {}", file_path, e))?;

    // Evaluate all forms in the file
    loop {
        match parser.parse() {
            Ok(Some(expr)) => {
                eval(&expr, env).map_err(|e| format!("Error in '{}': {}", file_path, e))?;
            }
            Ok(None) => break,
            Err(e) => return Err(format!("Parse error in '{}': {}", file_path, e)),
        }
    }

    Ok(())
}

/// Run the interactive REPL
fn run_repl(env: &Env) {
    println!("lisplet v0.1.0");

    loop {
        print!("lisp> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {
                let input = input.trim();
                if input.is_empty() {
                    continue;
                }

                // A failed form leaves the global environment intact;
                // report the error and keep reading
                match Parser::new(input) {
                    Ok(mut parser) => match parser.parse() {
                        Ok(Some(expr)) => match eval(&expr, env) {
                            Ok(result) => println!("{}", result),
                            Err(e) => eprintln!("Error: {}", e),
                        },
                        Ok(None) => {}
                        Err(e) => eprintln!("{}", e),
                    },
                    Err(e) => eprintln!("{}", e),
                }
            }
            Err(e) => {
                eprintln!("Read error: {}", e);
                break;
            }
        }
    }
}
