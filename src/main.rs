use clap::{value_t, App, Arg};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io;

mod sample;
mod session;

type Error = anyhow::Error;

const LOG_ENV: &str = "SKILLTREE_LOG";

fn main() -> () {
    init_tracing();

    match driver() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn driver() -> Result<(), Error> {
    let matches = App::new("Skill Tree")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Learn and forget abilities in a sample skill tree")
        .arg(
            Arg::with_name("script")
                .value_name("SCRIPT")
                .help("Command script to replay, '-' for stdin")
                .required(false)
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("score")
                .long("score")
                .value_name("SCORE")
                .help("Starting score")
                .takes_value(true),
        )
        .get_matches();

    let score = if matches.is_present("score") {
        value_t!(matches, "score", u64)?
    } else {
        0
    };

    let filename = matches.value_of("script");
    let reader: Box<dyn ::std::io::Read + 'static> = match filename {
        Some("-") | None => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| SkillTreeError::ScriptNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };

    let mut book = sample::book()?;
    book.earn(score);

    let stdout = io::stdout();
    let mut session = session::Session::new(book, stdout.lock());
    session.run(reader)
}

#[derive(Debug, Error)]
pub enum SkillTreeError {
    #[error("Script not found: {0}")]
    ScriptNotFound(String, #[source] io::Error),
}
