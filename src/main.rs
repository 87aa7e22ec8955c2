use std::{env, process::ExitCode, sync::Arc};

use tfidf_recommender::{RecommendError, Recommender, RecommenderConfig, Snapshot};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: tfidf-recommender <snapshot.cbor> <command>
commands:
  terms <title> [k]        most characteristic terms of a document
  search <term> [n]        documents weighting a term the most
  best <term>              single best document for a term
  recommend <title>...     documents similar to the given ones
defaults come from TFIDF_REC_TOP_TERMS / TFIDF_REC_SEARCH_RESULTS / TFIDF_REC_RECOMMENDATIONS";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "query failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<ExitCode, RecommendError> {
    let config = RecommenderConfig::from_env();
    let snapshot: Snapshot<f32> = Snapshot::read_cbor(&args[0])?;
    let engine = Recommender::with_config(Arc::new(snapshot), config);

    let command = args[1].as_str();
    let rest = &args[2..];
    match command {
        "terms" => {
            let k = count_arg(rest.get(1), config.top_terms);
            print!("{}", engine.top_terms(&rest[0], k)?);
        }
        "search" => {
            let n = count_arg(rest.get(1), config.search_results);
            let hits = engine.search(&rest[0], n)?;
            if hits.is_empty() {
                println!("no document carries weight for {:?}", rest[0]);
            } else {
                print!("{hits}");
            }
        }
        "best" => match engine.best_match(&rest[0])? {
            Some(title) => println!("{title}"),
            None => println!("no document carries weight for {:?}", rest[0]),
        },
        "recommend" => {
            for (rank, title) in engine.recommend_for_default(rest)?.iter().enumerate() {
                println!("{:>3}. {title}", rank + 1);
            }
        }
        other => {
            eprintln!("unknown command {other:?}\n{USAGE}");
            return Ok(ExitCode::from(2));
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Optional positional count, falling back to the configured default
fn count_arg(arg: Option<&String>, default: usize) -> usize {
    match arg.map(|s| s.parse::<usize>()) {
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            warn!(arg = ?arg, default, "not a count, using the default");
            default
        }
        None => default,
    }
}
