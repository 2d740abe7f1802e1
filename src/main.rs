use clap::{Parser, Subcommand};
use pubg_tracker::display::output::{
    display_error, display_info, display_json, display_stats_table, display_success,
};
use pubg_tracker::{Config, StatsFilter, TrackerClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "PUBG Tracker")]
#[command(about = "Look up PUBG player statistics", long_about = None)]
struct Args {
    /// API key (overrides TRN_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API base URL (overrides PUBG_TRACKER_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the raw statistics of a player
    Stats {
        /// Player nickname
        nickname: String,
    },

    /// Find a player by Steam ID
    Search {
        /// 64-bit Steam ID
        steam_id: String,
    },

    /// Show a player's stats filtered by region, match mode and season
    Filter {
        /// Player nickname
        nickname: String,

        /// Region (e.g. na, eu, agg)
        #[arg(short, long)]
        region: Option<String>,

        /// Match mode (solo, duo, squad)
        #[arg(short, long = "match")]
        match_mode: Option<String>,

        /// Season identifier (e.g. 2017-pre1)
        #[arg(short, long)]
        season: Option<String>,

        /// Show the nested per-stat rows of the matching records
        #[arg(long)]
        expand: bool,

        /// Print the rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pubg_tracker=info")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env(args.base_url)?;
    let mut client = TrackerClient::new(config);
    if let Some(api_key) = args.api_key {
        client.set_api_key(api_key);
    }

    match args.command {
        Command::Stats { nickname } => {
            display_info(&format!("Fetching stats for {}", nickname));
            let stats = client.fetch_player_stats(&nickname)?;
            display_json(&stats);
        }
        Command::Search { steam_id } => {
            display_info(&format!("Searching for Steam ID {}", steam_id));
            let player = client.find_player_by_steam_id(&steam_id)?;
            display_success("Player found");
            display_json(&player);
        }
        Command::Filter {
            nickname,
            region,
            match_mode,
            season,
            expand,
            json,
        } => {
            let filter = StatsFilter {
                region,
                match_mode,
                season,
            };
            display_info(&format!("Fetching filtered stats for {}", nickname));
            let table = client.fetch_filtered_stats(&nickname, &filter)?;

            let (table, title) = if expand {
                (table.expand_nested()?, format!("Detailed stats for {}", nickname))
            } else {
                (table, format!("Stats for {}", nickname))
            };

            if json {
                display_json(&serde_json::to_value(&table)?);
            } else {
                display_stats_table(&table, &title);
            }
        }
    }

    Ok(())
}
