use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;
use wisp::{default_env, eval::eval, parser::parse, Env, Value};

fn main() -> anyhow::Result<()> {
    let env = Rc::new(RefCell::new(default_env()));
    let files: Vec<String> = std::env::args().skip(1).collect();

    if files.is_empty() {
        repl(env)
    } else {
        run_files(&files, env)
    }
}

/// Read one expression per line, evaluate against the shared global
/// environment, print non-nil results. Failures are reported and the loop
/// continues; end-of-input exits cleanly.
fn repl(env: Rc<RefCell<Env>>) -> anyhow::Result<()> {
    let mut editor = rustyline::DefaultEditor::new()?;

    while let Ok(line) = editor.readline("wisp> ") {
        let _ = editor.add_history_entry(&line);
        for parsed in parse(&line) {
            let outcome = match parsed {
                Ok(expr) => eval(expr, env.clone()).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match outcome {
                Ok(Value::Nil) => {}
                Ok(value) => println!("{}", value),
                Err(message) => println!("Error: {}", message),
            }
        }
    }

    Ok(())
}

/// Execute each file in turn against the shared global environment and
/// print the last expression's result if it produced a value. Any failure
/// aborts the run.
fn run_files(files: &[String], env: Rc<RefCell<Env>>) -> anyhow::Result<()> {
    let mut last = Value::Nil;

    for path in files {
        let source =
            std::fs::read_to_string(path).with_context(|| format!("could not read {}", path))?;
        for parsed in parse(&source) {
            let expr = parsed.with_context(|| format!("parse error in {}", path))?;
            last = eval(expr, env.clone()).with_context(|| format!("error in {}", path))?;
        }
    }

    if last != Value::Nil {
        println!("{}", last);
    }

    Ok(())
}
