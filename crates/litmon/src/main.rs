//! litmon entry point.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use litmon::config::Config;
use litmon::export;
use litmon::filter::{FilterMode, PaperFilter};
use litmon::llm::LlmClient;
use litmon::models::{Paper, QueryParams};
use litmon::notify::SlackNotifier;
use litmon::pipeline::Pipeline;
use litmon::sources::{self, AclAnthologySource, ArxivSource, OpenReviewSource, PaperSource};

#[derive(Parser, Debug)]
#[command(name = "litmon")]
#[command(about = "Fetch, filter and announce new research papers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Filtering strategy: matching or llm
    #[arg(long, global = true, default_value = "matching", value_parser = FilterMode::from_str)]
    filtering_mode: FilterMode,

    /// Keyword tested against title/abstract in matching mode
    #[arg(long, global = true, default_value = "LVLM")]
    keyword: String,

    /// Instruction handed to the model in llm mode
    #[arg(
        long,
        global = true,
        default_value = "Choose papers related to 'Large Vision Language Models'."
    )]
    prompt: String,

    /// Announce surviving papers to Slack
    #[arg(long, global = true)]
    notify: bool,

    /// Write surviving papers to this JSONL file
    #[arg(long, global = true)]
    export: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch from the arXiv export API
    Arxiv {
        /// arXiv category of papers to fetch
        #[arg(long, default_value = "cs.CL")]
        category: String,

        /// Inclusive start of the submission window (YYYYMMDD)
        #[arg(long, default_value = "20240101")]
        start: String,

        /// Inclusive end of the submission window (YYYYMMDD)
        #[arg(long, default_value = "20240102")]
        end: String,

        /// Maximum number of papers to fetch
        #[arg(long, default_value_t = 100)]
        max_results: u32,
    },

    /// Fetch conference proceedings (ACL Anthology or OpenReview)
    Conference {
        /// Conference acronym, e.g. ACL or ICLR
        #[arg(long, default_value = "ACL")]
        conference: String,

        /// Conference year
        #[arg(long, default_value_t = 2024)]
        year: i32,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

fn print_paper(paper: &Paper) {
    println!("{}", "-".repeat(30));
    println!("Title: {}", paper.title);
    println!("Authors: {}", paper.author_names());
    println!("Abstract: {}", paper.r#abstract);
    println!("{}", "-".repeat(30));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = Config::from_env();

    let (source, params): (Box<dyn PaperSource>, QueryParams) = match &cli.command {
        Command::Arxiv { category, start, end, max_results } => {
            let params =
                QueryParams::arxiv(category.clone(), start.clone(), end.clone(), *max_results)?;
            (Box::new(ArxivSource::new(&config)?), params)
        }
        Command::Conference { conference, year } => {
            if sources::is_acl_anthology_venue(conference) {
                let params = QueryParams::conference(conference.to_lowercase(), *year);
                (Box::new(AclAnthologySource::new(&config)), params)
            } else if sources::is_openreview_venue(conference) {
                let params = QueryParams::conference(conference.clone(), *year);
                (Box::new(OpenReviewSource::connect(&config).await?), params)
            } else {
                anyhow::bail!("conference '{conference}' is not supported");
            }
        }
    };

    let filter =
        PaperFilter::new(LlmClient::new(&config)?).with_chunk_size(config.filter_chunk_size);

    let mut pipeline = Pipeline::new(source, filter);
    if cli.notify {
        pipeline = pipeline.with_notifier(SlackNotifier::new(&config)?);
    }

    let filtering_query = match cli.filtering_mode {
        FilterMode::Matching => cli.keyword.clone(),
        FilterMode::Llm => cli.prompt.clone(),
    };

    let papers = pipeline.run(&params, &filtering_query, cli.filtering_mode).await?;

    for paper in &papers {
        print_paper(paper);
    }

    if let Some(path) = &cli.export {
        export::write_jsonl(&papers, path)?;
        tracing::info!(path = %path.display(), exported = papers.len(), "export complete");
    }

    Ok(())
}
