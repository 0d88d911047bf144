use std::{env, fs::read_to_string, process};

use frontend::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: frontend <source-file>");
        process::exit(1);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, file_name, &source);
            process::exit(1);
        }
    };

    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, file_name, &source);
            process::exit(1);
        }
    };

    println!("{}", program);
}
