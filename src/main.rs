use clap::Parser;
use toy_rs::{run, run_file, ToyError, Variables};

/// Runs a toy program and prints its final variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the program from the file named by CONTENTS.
    #[arg(short, long)]
    file: bool,

    /// Describe each error instead of printing a bare marker.
    #[arg(short, long)]
    explain: bool,

    /// Program text, e.g. "x = 1; y = x * 2;".
    contents: String,
}

fn render(outcome: &Result<Variables, Vec<ToyError>>, explain: bool) -> String {
    match outcome {
        Ok(variables) => variables.to_string(),
        Err(errors) => errors
            .iter()
            .map(|e| if explain { format!("error: {e}\n") } else { "error\n".to_string() })
            .collect(),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let outcome = if args.file {
        let contents = std::fs::read_to_string(&args.contents).unwrap_or_else(|e| {
            eprintln!("Failed to read '{}': {e}", &args.contents);
            std::process::exit(1);
        });
        run_file(&contents)
    } else {
        run(&args.contents)
    };

    print!("{}", render(&outcome, args.explain));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bindings() {
        let outcome = run("x = 2; y = x + 3; x = y;");
        assert_eq!(render(&outcome, false), "x = 5\ny = 5\n");
    }

    #[test]
    fn test_render_one_marker_per_failure() {
        let outcome = run("x = 1; y = 1 / 0; z = q;");
        assert_eq!(render(&outcome, false), "error\nerror\n");
    }

    #[test]
    fn test_render_explained_failures() {
        let outcome = run("x = 01; y = 5 / 0;");
        assert_eq!(
            render(&outcome, true),
            "error: '01' is not a valid number\nerror: division by zero\n"
        );
    }

    #[test]
    fn test_render_missing_terminator() {
        let outcome = run("x = 1");
        assert_eq!(render(&outcome, true), "error: program does not end with ';'\n");
    }

    #[test]
    fn test_render_empty_program() {
        assert_eq!(render(&run(";"), false), "");
    }
}
