//! scholar - line-oriented shell over a scientist registry.
//!
//! Reads one command per line from stdin; logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar::config::{Config, ConfigFile};
use scholar::{Notice, Session, Strategy};

#[derive(Parser, Debug)]
#[command(name = "scholar")]
#[command(about = "Search, save and transform a scientist registry stored as XML")]
#[command(version)]
struct Cli {
    /// TOML config file (defaults to ./scholar.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input XML document
    #[arg(long, env = "SCHOLAR_INPUT")]
    input: Option<PathBuf>,

    /// Where saved results are written
    #[arg(long, env = "SCHOLAR_SAVED")]
    saved: Option<PathBuf>,

    /// Style-sheet used for the HTML transform
    #[arg(long, env = "SCHOLAR_STYLESHEET")]
    stylesheet: Option<PathBuf>,

    /// Where the HTML output is written
    #[arg(long, env = "SCHOLAR_HTML")]
    html: Option<PathBuf>,

    /// XSLT processor program
    #[arg(long, env = "SCHOLAR_TRANSFORM_PROGRAM")]
    transform_program: Option<PathBuf>,

    /// Initial extraction strategy (Query, SAX, DOM)
    #[arg(long)]
    strategy: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigFile {
        ConfigFile {
            input: self.input.clone(),
            saved: self.saved.clone(),
            stylesheet: self.stylesheet.clone(),
            html: self.html.clone(),
            transform_program: self.transform_program.clone(),
            strategy: self.strategy.clone(),
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(io::stderr))
            .init();
    }
}

const HELP: &str = "\
commands:
  attributes              list selectable attributes
  select <name|index|->   choose the search attribute (- clears)
  search [phrase]         filter on the selected attribute
  show                    list current results
  details <n>             show one result in full
  save                    save current results
  transform               write HTML from the saved results
  clear                   reset selection, results and saved set
  strategies              list extraction strategies
  strategy <name>         switch extraction strategy
  extract [attribute]     run the current strategy
  exit                    quit";

enum Flow {
    Continue,
    Exit,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::load(cli.config.as_deref())?;
    config.merge(cli.overrides())?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        input = %config.input_path.display(),
        "starting scholar"
    );

    let mut session = Session::new(config);
    let mut out = io::stdout().lock();
    if let Err(notice) = session.load() {
        print_notice(&mut out, &notice)?;
    }
    writeln!(out, "strategy: {}  (type 'help' for commands)", session.strategy())?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        match run_command(&mut session, line.trim(), &mut out, &mut lines)? {
            Flow::Continue => {}
            Flow::Exit => break,
        }
    }
    Ok(())
}

fn run_command<W: Write>(
    session: &mut Session,
    line: &str,
    out: &mut W,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Flow> {
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "" => {}
        "help" | "?" => writeln!(out, "{HELP}")?,
        "attributes" => {
            for (i, name) in session.catalog().iter().enumerate() {
                let mark = if session.selected_attribute() == Some(name) { "*" } else { " " };
                writeln!(out, "{mark}{i:>3}  {name}")?;
            }
        }
        "select" => {
            if rest == "-" || rest.is_empty() {
                session.select_attribute(None);
            } else if let Ok(index) = rest.parse::<usize>() {
                session.select_attribute(Some(index));
            } else {
                session.select_attribute_named(rest);
            }
            match session.selected_attribute() {
                Some(name) => writeln!(out, "selected: {name}")?,
                None => writeln!(out, "no attribute selected")?,
            }
        }
        "search" => match session.search(rest) {
            Some(result) => {
                writeln!(out, "{}", result.message())?;
                list_results(session, out)?;
            }
            None => tracing::debug!("search skipped: no document or no attribute selected"),
        },
        "show" => list_results(session, out)?,
        "details" => {
            let notice = rest.parse::<usize>().ok().and_then(|i| session.details(i));
            match notice {
                Some(notice) => print_notice(out, &notice)?,
                None => writeln!(out, "no such result")?,
            }
        }
        "save" => print_notice(out, &session.save())?,
        "transform" => print_notice(out, &session.transform())?,
        "clear" => {
            session.clear();
            writeln!(out, "cleared")?;
        }
        "strategies" => {
            let current = session.strategy();
            for name in session.strategies().names() {
                let mark = if Strategy::from_name(name) == Some(current) { "*" } else { " " };
                writeln!(out, "{mark} {name}")?;
            }
        }
        "strategy" => match session.select_strategy(rest) {
            Some(strategy) => writeln!(out, "strategy: {strategy}")?,
            None => writeln!(out, "unknown strategy '{rest}'")?,
        },
        "extract" => {
            let attribute = if rest.is_empty() {
                session.selected_attribute().map(str::to_string)
            } else {
                Some(rest.to_string())
            };
            match attribute {
                Some(attribute) => match session.extract(&attribute) {
                    Ok(values) => {
                        writeln!(out, "{} ({} values via {})", attribute, values.len(), session.strategy())?;
                        for value in values {
                            writeln!(out, "  {value}")?;
                        }
                    }
                    Err(notice) => print_notice(out, &notice)?,
                },
                None => writeln!(out, "no attribute given or selected")?,
            }
        }
        "exit" | "quit" => {
            let prompt = session.exit_prompt();
            loop {
                write!(out, "{}: {} [{}/{}] ", prompt.title, prompt.message, prompt.accept, prompt.reject)?;
                out.flush()?;
                let Some(answer) = input.next().transpose()? else {
                    return Ok(Flow::Exit);
                };
                match prompt.answer(&answer) {
                    Some(true) => return Ok(Flow::Exit),
                    Some(false) => break,
                    None => continue,
                }
            }
        }
        other => writeln!(out, "unknown command '{other}' (try 'help')")?,
    }
    Ok(Flow::Continue)
}

fn list_results<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    match session.results() {
        Some(result) => {
            for (i, scientist) in result.records.iter().enumerate() {
                writeln!(out, "{i:>4}  {scientist}")?;
            }
        }
        None => writeln!(out, "no results")?,
    }
    Ok(())
}

fn print_notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    writeln!(out, "{notice}")
}
