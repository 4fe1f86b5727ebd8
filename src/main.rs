use std::error::Error;
use std::io::{self, Write};

use clap::{Arg, ArgAction, ArgMatches, Command};
use crossterm::tty::IsTty;
use log::{debug, error, info};

use ribocode::logging::{init_logging, log_critical_error, log_shutdown, log_system_info, set_log_level};
use ribocode::ui::{format_codon_table, format_triplets};
use ribocode::{App, CodonTable, RibocodeError};

fn build_cli() -> Command {
    Command::new("ribocode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("DNA to RNA converter and codon translator")
        .arg(
            Arg::new("sequence")
                .value_name("SEQUENCE")
                .help("DNA sequence (default: read one line from stdin)"),
        )
        .arg(
            Arg::new("separator")
                .short('s')
                .long("separator")
                .value_name("SEP")
                .help("Separator between amino acids")
                .default_value("-"),
        )
        .arg(
            Arg::new("one-letter")
                .long("one-letter")
                .action(ArgAction::SetTrue)
                .help("Print one-letter amino acid codes"),
        )
        .arg(
            Arg::new("triplets")
                .long("triplets")
                .action(ArgAction::SetTrue)
                .help("Group the RNA sequence into codons"),
        )
        .arg(
            Arg::new("no-table")
                .long("no-table")
                .action(ArgAction::SetTrue)
                .help("Do not print the codon table"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disable colored amino acids"),
        )
}

fn read_sequence_from_stdin() -> Result<String, RibocodeError> {
    print!("Enter DNA sequence (A,T,G,C only): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Translate `raw` and write the report to `out`. Returns the process exit
/// status: 0 on success, 1 when the input is not DNA.
fn run(
    matches: &ArgMatches,
    raw: &str,
    colored: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<i32> {
    let mut app = App::new();
    if let Some(separator) = matches.get_one::<String>("separator") {
        app.separator = separator.clone();
    }
    app.one_letter = matches.get_flag("one-letter");
    app.colored = colored && !matches.get_flag("no-color");

    if let Err(e) = app.load_sequence(raw) {
        error!("Invalid input: {e}");
        writeln!(err, "Invalid DNA sequence!")?;
        writeln!(err, "{e}")?;
        return Ok(1);
    }

    if matches.get_flag("triplets") {
        writeln!(out, "RNA Sequence: {}", format_triplets(&app.mrna))?;
    } else {
        writeln!(out, "{}", app.rna_line())?;
    }
    writeln!(out, "{}", app.protein_line())?;

    if !matches.get_flag("no-table") {
        writeln!(out, "\n--- CODON TABLE ---")?;
        writeln!(out, "{}", format_codon_table(CodonTable::standard()))?;
    }
    out.flush()?;

    info!("Run complete");
    Ok(0)
}

fn main() -> Result<(), Box<dyn Error>> {
    human_panic::setup_panic!();

    let matches = build_cli().get_matches();

    set_log_level();
    if let Err(e) = init_logging() {
        eprintln!("Warning: could not initialize logging: {e}");
    }
    log_system_info();

    let raw = match matches.get_one::<String>("sequence") {
        Some(sequence) => sequence.clone(),
        None => match read_sequence_from_stdin() {
            Ok(line) => line,
            Err(e) => {
                log_critical_error(&e.to_string(), Some("stdin"));
                log_shutdown();
                std::process::exit(1);
            }
        },
    };

    let stdout = io::stdout();
    let colored = stdout.is_tty();
    let status = match run(&matches, &raw, colored, &mut stdout.lock(), &mut io::stderr().lock()) {
        Ok(status) => status,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed early: {e}");
            0
        }
        Err(e) => {
            log_critical_error(&e.to_string(), Some("output"));
            1
        }
    };

    log_shutdown();
    if status != 0 {
        std::process::exit(status);
    }
    Ok(())
}
