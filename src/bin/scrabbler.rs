extern crate clap;

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Stdout, Write};
use std::process::exit;
use std::time::SystemTime;

use clap::{App, Arg, ArgMatches, SubCommand};
use simple_error::{bail, try_with};

use scrabbler::*;

const BATCH_SIZE: usize = 1000;

enum Output {
    Text(Sections),
    Json(JsonReport<Stdout>),
}

fn output_batch(output: &mut Output, inputs: &[String], results: &[Result<QueryResult, SolveError>]) -> io::Result<usize> {
    let mut failures = 0;
    let stdout = io::stdout();
    for (input, result) in inputs.iter().zip(results) {
        if let Err(e) = result {
            failures += 1;
            eprintln!("ERROR: unable to solve \"{}\": {}", input, e);
        }
        match output {
            Output::Text(sections) => {
                if let Ok(result) = result {
                    write_text(&mut stdout.lock(), result, *sections)?;
                }
            }
            Output::Json(report) => report.write(input, result)?,
        }
    }
    Ok(failures)
}

///Solves all lines of the input stream, returns the number of lines that could not be solved
fn process(solver: &Solver, inputstream: impl Read, output: &mut Output, progress: bool, seqnr: &mut usize, progresstime: &mut SystemTime) -> io::Result<usize> {
    let mut failures = 0;
    let mut batch: Vec<String> = Vec::with_capacity(BATCH_SIZE);
    let f_buffer = BufReader::new(inputstream);
    for line in f_buffer.lines() {
        batch.push(line?);
        if batch.len() == BATCH_SIZE {
            failures += output_batch(output, &batch, &solver.solve_lines(&batch))?;
            *seqnr += batch.len();
            batch.clear();
            if progress {
                *progresstime = show_progress(*seqnr, *progresstime);
            }
        }
    }
    if !batch.is_empty() {
        failures += output_batch(output, &batch, &solver.solve_lines(&batch))?;
        *seqnr += batch.len();
    }
    Ok(failures)
}

fn show_progress(seqnr: usize, lasttime: SystemTime) -> SystemTime {
    let now = SystemTime::now();
    match now.duration_since(lasttime) {
        Ok(elapsed) if elapsed.as_millis() > 0 => {
            let rate = BATCH_SIZE as f64 / elapsed.as_secs_f64();
            eprintln!("@ {} - processing speed was {:.0} lines per second", seqnr, rate);
        }
        _ => eprintln!("@ {}", seqnr),
    }
    now
}

fn output_index(index: &DictionaryIndex) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut entries: Vec<_> = index.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    for (key, words) in entries {
        writeln!(out, "{}\t{}", key, words.join("\t"))?;
    }
    Ok(())
}

pub fn common_arguments<'a, 'b>() -> Vec<clap::Arg<'a, 'b>> {
    let mut args: Vec<Arg> = Vec::new();
    args.push(Arg::with_name("dictionary")
        .long("dictionary")
        .short("d")
        .help("Dictionary to match against: a plain text file with words separated by whitespace (typically one per line)")
        .takes_value(true)
        .required(true));
    args.push(Arg::with_name("max_letters")
        .long("max-letters")
        .short("m")
        .help("Maximum number of letters on an input line, longer lines are rejected. The work per line doubles with every letter. Can not exceed 64")
        .takes_value(true)
        .default_value("64"));
    args.push(Arg::with_name("extremes")
        .long("extremes")
        .short("e")
        .help("Report only the shortest and longest words rather than all words grouped by length")
        .required(false));
    args.push(Arg::with_name("json")
        .long("json")
        .short("j")
        .help("Output json instead of text")
        .required(false));
    args.push(Arg::with_name("single-thread")
        .long("single-thread")
        .help("Process input lines on a single thread")
        .required(false));
    args.push(Arg::with_name("progress")
        .long("progress")
        .help("Show progress")
        .required(false));
    args.push(Arg::with_name("files")
        .help("Input files, each line holds the letters for one query (defaults to standard input)")
        .takes_value(true)
        .multiple(true)
        .required(false));
    args
}

fn run(rootargs: &ArgMatches) -> Result<usize, Box<dyn Error>> {
    let args = if let Some(args) = rootargs.subcommand_matches("solve") {
        args
    } else if let Some(args) = rootargs.subcommand_matches("index") {
        args
    } else {
        bail!("No command specified, use solve or index (see --help)");
    };

    let dictionary = args.value_of("dictionary").unwrap_or_default();
    eprintln!("Loading dictionary...");
    let index = try_with!(DictionaryIndex::from_file(dictionary), "unable to read dictionary {}", dictionary);
    eprintln!(" - {} words under {} alphagrams", index.len(), index.num_keys());

    if rootargs.subcommand_matches("index").is_some() {
        eprintln!("Outputting dictionary index...");
        output_index(&index)?;
        return Ok(0);
    }

    let max_letters = args.value_of("max_letters").unwrap_or("64");
    let max_letters = try_with!(max_letters.parse::<usize>(), "maximum letters should be an integer between 1 and 64, got {}", max_letters);
    let mut params = SolverParams::default().with_max_letters(max_letters);
    if args.is_present("extremes") {
        params = params.with_presentation(Presentation::Extremes);
    }
    if args.is_present("single-thread") {
        params = params.with_single_thread();
    }
    let solver = Solver::new(index, params)?;
    let progress = args.is_present("progress");

    let mut output = if args.is_present("json") {
        Output::Json(JsonReport::begin(io::stdout())?)
    } else {
        Output::Text(Sections::from(solver.params.presentation))
    };

    let files: Vec<&str> = match args.values_of("files") {
        Some(files) => files.collect(),
        None => vec!["-"],
    };
    let mut failures = 0;
    let mut seqnr = 0;
    let mut progresstime = SystemTime::now();
    for filename in files {
        match filename {
            "-" | "STDIN" | "stdin" => {
                eprintln!("(accepting standard input; enter letters to solve, one query per line)");
                let stdin = io::stdin();
                failures += process(&solver, stdin, &mut output, progress, &mut seqnr, &mut progresstime)?;
            }
            _ => {
                let f = try_with!(File::open(filename), "unable to open file {}", filename);
                failures += process(&solver, f, &mut output, progress, &mut seqnr, &mut progresstime)?;
            }
        }
    }

    if let Output::Json(report) = output {
        report.finish()?;
    }
    if failures > 0 {
        eprintln!("{} of {} lines could not be solved", failures, seqnr);
    }
    Ok(failures)
}

fn main() {
    let rootargs = App::new("Scrabbler")
                    .version(env!("CARGO_PKG_VERSION"))
                    .about("Finds all dictionary words that can be made from a subset of the given letters")
                    .subcommand(
                        SubCommand::with_name("solve")
                            .about("Solve every input line; report all dictionary words that can be formed from its letters")
                            .args(&common_arguments())
                    )
                    .subcommand(
                        SubCommand::with_name("index")
                            .about("Compute and output the alphagram index of the dictionary")
                            .args(&common_arguments())
                    )
                    .arg(Arg::with_name("debug")
                        .long("debug")
                        .short("D")
                        .help("Debug")
                        .required(false))
                    .get_matches();

    let mut logger = env_logger::Builder::from_default_env();
    if rootargs.is_present("debug") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match run(&rootargs) {
        Ok(0) => {}
        Ok(_) => exit(2),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(1);
        }
    }
}
