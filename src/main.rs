mod cli;
mod display;
mod style;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser as _;
use ella_calc::{Evaluator, SyntaxTree};

use cli::{Cli, Command};
use style::{Color, Styled};

struct Session {
    show_tree: bool,
    color: bool,
}

impl Session {
    /// Prints the outcome of one line. Returns whether it produced a value.
    fn run_line(&self, out: &mut impl Write, line: &str) -> io::Result<bool> {
        let tree = SyntaxTree::parse(line);

        if self.show_tree {
            let rendered = display::tree_to_string(tree.root_node());
            write!(out, "{}", Styled::new(Color::Gray, self.color, rendered))?;
        }

        if tree.has_errors() {
            for diagnostic in tree.diagnostics() {
                writeln!(out, "{}", Styled::new(Color::Red, self.color, diagnostic))?;
            }
            return Ok(false);
        }

        match Evaluator::new(tree.root()).evaluate() {
            Ok(value) => {
                writeln!(out, "{value}")?;
                Ok(true)
            }
            Err(why) => {
                log::debug!("evaluation failed: {why:?}");
                writeln!(out, "{}", Styled::new(Color::Red, self.color, why))?;
                Ok(false)
            }
        }
    }
}

enum Step {
    Continue,
    Exit,
}

fn repl_step(session: &mut Session, out: &mut impl Write, line: &str) -> io::Result<Step> {
    match line {
        "" | "#exit" => return Ok(Step::Exit),
        "#showTree" => {
            session.show_tree = !session.show_tree;
            let state = if session.show_tree { "Showing" } else { "Not showing" };
            writeln!(out, "{state} parse trees.")?;
        }
        "#cls" => write!(out, "\x1b[1;1H\x1B[2J")?,
        _ => {
            let _ = session.run_line(out, line)?;
        }
    }
    Ok(Step::Continue)
}

fn repl(session: &mut Session) -> io::Result<()> {
    let input = io::stdin();
    let mut output = io::stdout();
    let mut buf = String::new();

    loop {
        buf.clear();
        write!(output, " >> ")?;
        output.flush()?;

        if input.read_line(&mut buf)? == 0 {
            break;
        }

        let line = buf.trim_end_matches(['\r', '\n']);
        if let Step::Exit = repl_step(session, &mut output, line)? {
            break;
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut session = Session {
        show_tree: cli.show_tree,
        color: !cli.no_color,
    };

    let result = match cli.command {
        Some(Command::Eval { expr }) => session.run_line(&mut io::stdout(), &expr),
        Some(Command::Repl) | None => repl(&mut session).map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(why) => {
            log::error!("{why}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod test {
    use super::{repl_step, Session, Step};

    fn session(show_tree: bool) -> Session {
        Session {
            show_tree,
            color: false,
        }
    }

    fn run(session: &Session, line: &str) -> (bool, String) {
        let mut out = vec![];
        let ok = session.run_line(&mut out, line).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_value() {
        assert_eq!(run(&session(false), "(1+2)*3"), (true, "9\n".into()));
    }

    #[test]
    fn prints_diagnostics_instead_of_value() {
        let (ok, out) = run(&session(false), "1+");
        assert!(!ok);
        assert_eq!(out, "Error: Unexpected token <EndOfFile>, expected <Number>\n");
    }

    #[test]
    fn reports_division_by_zero() {
        let (ok, out) = run(&session(false), "4/0");
        assert!(!ok);
        assert_eq!(out, "Error: Attempted to divide by zero at position 1\n");
    }

    #[test]
    fn tree_precedes_value() {
        let (_, out) = run(&session(true), "5");
        assert_eq!(out, "└──NumberExpression\n    └──NumberToken 5\n5\n");
    }

    #[test]
    fn show_tree_toggles() {
        let mut session = session(false);
        let mut out = vec![];

        assert!(matches!(
            repl_step(&mut session, &mut out, "#showTree").unwrap(),
            Step::Continue
        ));
        assert!(session.show_tree);
        assert!(matches!(
            repl_step(&mut session, &mut out, "").unwrap(),
            Step::Exit
        ));
    }
}
