use std::path::Path;
use std::sync::Arc;
use crate::api::routes::trigger::CONTENT_SCHEME;
use crate::cli::commands::FuzzArgs;
use crate::errors::FuzzError;
use crate::probe::{fuzz, HttpProber};
use crate::wordlist::Wordlist;

pub async fn handle_fuzz(args: FuzzArgs) -> Result<(), FuzzError> {
    if args.authority.is_empty() {
        return Err(FuzzError::MissingAuthority);
    }

    let config = super::load_config(args.config.as_deref()).await?;
    let wordlist_path = args.wordlist.as_deref().unwrap_or(config.wordlist_path());
    let reporter = super::build_reporter(&config, args.report.as_deref(), args.found.as_deref());

    let wordlist = Wordlist::load(Path::new(wordlist_path)).await?;
    let prober = Arc::new(HttpProber::new()?);

    let base_locator = format!("{}{}", CONTENT_SCHEME, args.authority);
    let run = fuzz(prober, &base_locator, wordlist.shared()).await?;
    reporter.report(&run).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    }
    println!(
        "Fuzzing completed. {} paths probed, {} responded, {} accessible. Results saved to {}.",
        run.len(),
        run.responded().count(),
        run.accessible().count(),
        reporter.path().display()
    );
    Ok(())
}
