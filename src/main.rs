use std::error::Error;
use std::path::PathBuf;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use minisql::compiler::diagnostic::render_error;
use minisql::config::{ShellConfig, CONFIG_FILE};
use minisql::interpreter::{ExecResult, Interpreter, ResultSet};

fn execute_input(input: &str, interpreter: &mut Interpreter) {
    match interpreter.run(input) {
        Ok(results) => {
            for result in results {
                print_exec_result(result);
            }
        }
        Err(err) => {
            warn!(%err, "statement failed");
            println!("ERROR: {}", render_error(input, &err));
        }
    }
}

fn print_exec_result(result: ExecResult) {
    match result {
        ExecResult::Success(msg) => {
            println!("{msg}");
        }

        ExecResult::AffectedRows(count, msg) => {
            println!("{msg} ({count} rows affected)");
        }

        ExecResult::QueryResult(result_set) => {
            print_table(&result_set);
        }
    }
}

fn print_table(result_set: &ResultSet) {
    let header: Vec<String> = result_set.columns.iter()
        .map(|column| column.name.clone())
        .collect();
    let rows: Vec<Vec<String>> = result_set.rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    // Compute column widths
    let mut widths: Vec<usize> = header.iter().map(|name| name.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    print_row(&header, &widths);
    let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
    print_row(&rule, &widths);

    if rows.is_empty() {
        println!("(no rows)");
        return;
    }

    for row in &rows {
        print_row(row, &widths);
    }
}

fn print_row(cells: &[String], widths: &[usize]) {
    for (cell, width) in cells.iter().zip(widths) {
        print!("| {:width$} ", cell, width = width);
    }
    println!("|");
}

fn init_logging(config: &ShellConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let config_path = std::env::args().nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = ShellConfig::load_or_default(&config_path)?;
    init_logging(&config);

    let mut editor = DefaultEditor::new()?;
    if let Some(history) = &config.history_file {
        // a missing history file is expected on first start
        let _ = editor.load_history(history);
    }

    let mut interpreter = Interpreter::new();

    println!("minisql shell");
    println!("Type SQL statements ending with ';'");
    println!("Type 'exit;' to quit\n");

    let mut buffer = String::new();
    loop {
        let line = match editor.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        editor.add_history_entry(line.as_str())?;

        buffer.push_str(&line);
        buffer.push('\n');

        // Only execute once we see a semicolon
        if !buffer.trim_end().ends_with(';') {
            continue;
        }

        if buffer.trim().eq_ignore_ascii_case("exit;") {
            break;
        }

        execute_input(&buffer, &mut interpreter);
        buffer.clear();
    }

    if let Some(history) = &config.history_file {
        editor.save_history(history)?;
    }
    Ok(())
}
