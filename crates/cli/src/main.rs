use ruminion_harness::{run_suite, write_json, write_text, HarnessConfig, TargetCard};
use std::path::PathBuf;

struct CliOptions {
    cards: Vec<TargetCard>,
    config: HarnessConfig,
    json_path: Option<PathBuf>,
    text_path: Option<PathBuf>,
    quiet: bool,
    help: bool,
}

fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        cards: Vec::new(),
        config: HarnessConfig::default(),
        json_path: None,
        text_path: None,
        quiet: false,
        help: false,
    };
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--card" => {
                let value = args
                    .get(idx + 1)
                    .ok_or_else(|| "--card needs a card name".to_string())?;
                let card = TargetCard::from_name(value)
                    .ok_or_else(|| format!("unknown card: {value}"))?;
                if !options.cards.contains(&card) {
                    options.cards.push(card);
                }
                idx += 1;
            }
            "--seed" => {
                let value = args
                    .get(idx + 1)
                    .ok_or_else(|| "--seed needs a number".to_string())?;
                options.config.seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("bad seed: {value}"))?;
                idx += 1;
            }
            "--iterations" => {
                let value = args
                    .get(idx + 1)
                    .ok_or_else(|| "--iterations needs a number".to_string())?;
                options.config.iterations = value
                    .parse::<u32>()
                    .map_err(|_| format!("bad iteration count: {value}"))?;
                idx += 1;
            }
            "--debug-window" => {
                let value = args
                    .get(idx + 1)
                    .ok_or_else(|| "--debug-window needs a number".to_string())?;
                options.config.debug_window = value
                    .parse::<u32>()
                    .map_err(|_| format!("bad debug window: {value}"))?;
                idx += 1;
            }
            "--json" => {
                let value = args
                    .get(idx + 1)
                    .ok_or_else(|| "--json needs a path".to_string())?;
                options.json_path = Some(PathBuf::from(value));
                idx += 1;
            }
            "--text" => {
                let value = args
                    .get(idx + 1)
                    .ok_or_else(|| "--text needs a path".to_string())?;
                options.text_path = Some(PathBuf::from(value));
                idx += 1;
            }
            "--quiet" => options.quiet = true,
            "--help" | "-h" => options.help = true,
            other => return Err(format!("unknown option: {other}")),
        }
        idx += 1;
    }
    Ok(options)
}

fn print_usage() {
    println!("usage: ruminion-cli [options]");
    println!("  --card NAME         test one card (repeatable); default is all four");
    println!("                      names: adventurer, smithy, village, council_room");
    println!("  --seed N            rng seed (default 1542)");
    println!("  --iterations N      cases per card (default 10000)");
    println!("  --debug-window N    verbose captures after the first failure (default 5)");
    println!("  --json PATH         write the report as json");
    println!("  --text PATH         write the report as text");
    println!("  --quiet             print only the summary line");
    println!("  --help              show this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_cli_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            std::process::exit(1);
        }
    };
    if options.help {
        print_usage();
        return;
    }
    let cards = if options.cards.is_empty() {
        TargetCard::all().to_vec()
    } else {
        options.cards.clone()
    };
    let report = run_suite(&cards, &options.config);
    if options.quiet {
        println!("{}", report.summary_line());
    } else {
        println!("{}", report.to_text_report());
    }
    if let Some(path) = &options.json_path {
        if let Err(err) = write_json(path, &report) {
            eprintln!("could not write {}: {err}", path.display());
        }
    }
    if let Some(path) = &options.text_path {
        if let Err(err) = write_text(path, &report) {
            eprintln!("could not write {}: {err}", path.display());
        }
    }
}
