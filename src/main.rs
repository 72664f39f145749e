use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use clite::{
    display_error, lexer::lexer::tokenize, parser::parser::parse,
    type_checker::type_checker::type_check,
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: clite <file>");
        return ExitCode::FAILURE;
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(file_contents, Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            return ExitCode::FAILURE;
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = match parse(tokens, Rc::new(String::from(file_name))) {
        Ok(program) => program,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            return ExitCode::FAILURE;
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    let type_check_start = Instant::now();
    let type_map = match type_check(&program, Rc::new(String::from(file_name))) {
        Ok(type_map) => type_map,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            return ExitCode::FAILURE;
        }
    };

    println!("Type checked in {:?}", type_check_start.elapsed());
    println!("Total time: {:?}", start.elapsed());
    println!();
    println!("{}", program);
    println!();
    print!("{}", type_map);

    ExitCode::SUCCESS
}
