//! `arena`: command-line front end for the agent arena.
//!
//! ```text
//! arena board --mode sell
//! arena quote 1
//! arena trade 1 100 --outcome no
//! arena leaderboard --period all_time
//! arena chart --kind chance --seed 42
//! ```

use agent_arena::application::services::{
    ActivityFeed, ActivityFilter, ChartGenerator, HoldersService, LeaderboardService,
    MarketController, PanelLayout, PortfolioService, PreviewState, PriceStats, ProfileView,
};
use agent_arena::config::AppConfig;
use agent_arena::domain::services::quote_model::QuoteModel;
use agent_arena::domain::value_objects::{
    AgentId, LeaderboardPeriod, Outcome, PerformancePeriod, Timestamp, TradeMode,
};
use agent_arena::infrastructure::persistence::in_memory::{
    InMemoryActivityRepository, InMemoryAgentRepository, InMemoryHolderRepository,
    InMemoryLeaderboardRepository, InMemoryPortfolioRepository, InMemoryProfileRepository,
};
use agent_arena::telemetry;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "arena", version, about = "Bet Yes or No on trading agents")]
struct Cli {
    /// Settings file (TOML, YAML or JSON).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text where supported.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Agent board with Yes/No prices.
    Board {
        /// Button mode.
        #[arg(long, default_value = "buy")]
        mode: TradeMode,
    },
    /// Quote for one agent.
    Quote {
        /// Agent id.
        agent: String,
    },
    /// Preview and submit a trade.
    Trade {
        /// Agent id.
        agent: String,
        /// Stake: dollars when buying, shares when selling.
        stake: String,
        /// Side.
        #[arg(long, default_value = "yes")]
        outcome: Outcome,
        /// Buy or sell.
        #[arg(long, default_value = "buy")]
        mode: TradeMode,
        /// Only show the preview.
        #[arg(long)]
        dry_run: bool,
    },
    /// Profit and volume leaders.
    Leaderboard {
        /// weekly or all_time.
        #[arg(long, default_value = "weekly")]
        period: LeaderboardPeriod,
    },
    /// The sample user's portfolio.
    Portfolio,
    /// Recent trades.
    Activity {
        /// Only this agent's market.
        #[arg(long)]
        agent: Option<String>,
    },
    /// Top holders of an agent's market.
    Holders {
        /// Agent id.
        agent: String,
    },
    /// Synthetic chart series.
    Chart {
        /// Which series.
        #[arg(long, value_enum, default_value_t = ChartKind::Price)]
        kind: ChartKind,
        /// RNG seed; overrides the configured seed.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// An agent's profile.
    Profile {
        /// Agent id.
        agent: String,
        /// D, W or M.
        #[arg(long, default_value = "D")]
        period: PerformancePeriod,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ChartKind {
    /// % chance over the evening.
    Chance,
    /// Intraday Yes price.
    Price,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    telemetry::init_tracing(&cfg.logging).context("initialising tracing")?;

    let model = QuoteModel::new(cfg.quote).context("building quote model")?;

    match cli.command {
        Commands::Board { mode } => board(model, mode, cli.json),
        Commands::Quote { agent } => quote(model, &agent, cli.json),
        Commands::Trade {
            agent,
            stake,
            outcome,
            mode,
            dry_run,
        } => trade(model, &agent, &stake, outcome, mode, dry_run, cli.json),
        Commands::Leaderboard { period } => leaderboard(&cfg, period, cli.json),
        Commands::Portfolio => portfolio(cli.json),
        Commands::Activity { agent } => activity(agent, cli.json),
        Commands::Holders { agent } => holders(&agent, cli.json),
        Commands::Chart { kind, seed } => chart(kind, seed.or(cfg.charts.seed), cli.json),
        Commands::Profile { agent, period } => profile(&agent, period),
    }
}

fn controller(model: QuoteModel) -> Result<MarketController> {
    let repo = InMemoryAgentRepository::with_fixtures();
    MarketController::from_repository(&repo, model).context("loading agents")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn board(model: QuoteModel, mode: TradeMode, json: bool) -> Result<()> {
    let mut controller = controller(model)?;
    controller.set_mode(mode);
    let rows = controller.board();
    if json {
        return print_json(&rows);
    }
    for row in rows {
        println!(
            "{:>2}. [{}] {:<22} {:>14} {:>10} {:>8}  win {:>6}  {} | {}",
            row.rank,
            row.initials,
            row.name,
            row.volume,
            row.portfolio,
            row.change,
            row.win_rate,
            row.yes_label,
            row.no_label,
        );
    }
    Ok(())
}

fn quote(model: QuoteModel, agent: &str, json: bool) -> Result<()> {
    let controller = controller(model)?;
    let quote = controller.quote_for(&AgentId::new(agent))?;
    if json {
        return print_json(&quote);
    }
    println!("{quote}");
    Ok(())
}

fn trade(
    model: QuoteModel,
    agent: &str,
    stake: &str,
    outcome: Outcome,
    mode: TradeMode,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let mut controller = controller(model)?;
    controller.open_ticket(&AgentId::new(agent), outcome, PanelLayout::Desktop)?;
    controller.set_mode(mode);
    controller.ticket_mut().set_input(stake);

    match controller.preview()? {
        PreviewState::Hidden => println!("Enter an amount to see a preview"),
        PreviewState::NoQuote => println!("No quote available"),
        PreviewState::Available(preview) => println!(
            "{}: {}  ({})",
            preview.label(),
            preview.payout_label(),
            preview.avg_price_label()
        ),
    }

    if dry_run {
        controller.cancel();
        return Ok(());
    }

    let intent = controller.submit()?;
    if json {
        return print_json(&intent);
    }
    println!(
        "Submitted {} {} {} {} @ {} (id {})",
        intent.mode, intent.stake, intent.outcome, intent.agent_id, intent.price, intent.id
    );
    Ok(())
}

fn leaderboard(cfg: &AppConfig, period: LeaderboardPeriod, json: bool) -> Result<()> {
    let service = LeaderboardService::new(Arc::new(InMemoryLeaderboardRepository::with_fixtures()))
        .with_top_n(cfg.leaderboard.top_n);
    let profit = service.profit_leaders(period)?;
    let volume = service.volume_leaders(period)?;
    if json {
        return print_json(&serde_json::json!({ "profit": profit, "volume": volume }));
    }

    println!("{period} profit leaders");
    for entry in &profit {
        let tag = entry.badge().podium_tag().unwrap_or_default();
        println!(
            "  {:>4} {:<14} {:>12} {tag}",
            entry.badge(),
            entry.username(),
            entry.total_profit()
        );
    }
    println!("{period} volume leaders");
    for leader in &volume {
        println!(
            "  {:>4} {:<14} {:>12}",
            format!("#{}", leader.rank),
            leader.username,
            leader.volume.grouped(0)
        );
    }
    Ok(())
}

fn portfolio(json: bool) -> Result<()> {
    let service = PortfolioService::new(Arc::new(InMemoryPortfolioRepository::with_fixtures()));
    let summary = service.summary()?;
    if json {
        return print_json(&summary);
    }

    println!(
        "Value {}  P&L {}  Volume {}  Markets {}",
        summary.total_value,
        summary.total_pnl.signed(),
        summary.volume_traded,
        summary.markets_traded
    );
    for position in service.positions()? {
        println!(
            "  {} {} x{} avg {} now {} value {} pnl {} [{}]",
            position.market(),
            position.outcome(),
            position.shares(),
            position.avg_price(),
            position.current_price(),
            position.value(),
            position.pnl().signed(),
            position.status()
        );
    }
    for entry in service.history()? {
        println!(
            "  {} {} {} {} @ {} = {}  {}",
            entry.at(),
            entry.action(),
            entry.shares(),
            entry.outcome(),
            entry.price(),
            entry.value(),
            entry.market()
        );
    }
    Ok(())
}

fn activity(agent: Option<String>, json: bool) -> Result<()> {
    let now = Timestamp::now();
    let feed = ActivityFeed::new(Arc::new(InMemoryActivityRepository::with_fixtures(now)));
    let filter = agent
        .map(|id| ActivityFilter::Agent(AgentId::new(id)))
        .unwrap_or_default();
    let items = feed.items(&filter)?;
    if json {
        return print_json(&items);
    }
    for item in items {
        println!(
            "[{}] {}  {}",
            item.avatar_label(),
            item.describe(),
            item.at().age_label(&now)
        );
    }
    Ok(())
}

fn holders(agent: &str, json: bool) -> Result<()> {
    let service = HoldersService::new(Arc::new(InMemoryHolderRepository::with_fixtures()));
    let columns = service.for_agent(&AgentId::new(agent))?;
    if json {
        return print_json(&serde_json::json!({ "yes": columns.yes, "no": columns.no }));
    }
    for (side, holders) in [(Outcome::Yes, &columns.yes), (Outcome::No, &columns.no)] {
        println!("{side} holders");
        for holder in holders {
            println!(
                "  [{} {}] {:<16} {:>8}",
                holder.avatar_color(),
                holder.avatar_label(),
                holder.username(),
                holder.shares_label()
            );
        }
    }
    Ok(())
}

fn chart(kind: ChartKind, seed: Option<u64>, json: bool) -> Result<()> {
    match seed {
        Some(seed) => render_chart(ChartGenerator::seeded(seed), kind, json),
        None => render_chart(ChartGenerator::from_os_rng(), kind, json),
    }
}

fn render_chart<R: Rng>(mut generator: ChartGenerator<R>, kind: ChartKind, json: bool) -> Result<()> {
    match kind {
        ChartKind::Chance => {
            let series = generator.chance_series();
            if json {
                return print_json(&series);
            }
            for point in series {
                println!("{} {:.1}%", point.label, point.chance);
            }
        }
        ChartKind::Price => {
            let series = generator.yes_price_series();
            let stats = PriceStats::from_series(&series)?;
            if json {
                return print_json(&serde_json::json!({ "series": series, "stats": stats }));
            }
            for point in &series {
                println!("{} {} vol {}", point.label, point.price, point.volume);
            }
            if let Some(stats) = stats {
                println!(
                    "open {} high {} low {} change {} ({})",
                    stats.opening,
                    stats.high,
                    stats.low,
                    stats.change,
                    stats.change_percent_label()
                );
            }
        }
    }
    Ok(())
}

fn profile(agent: &str, period: PerformancePeriod) -> Result<()> {
    let repo = InMemoryProfileRepository::with_fixtures();
    let mut view = ProfileView::load(&repo, &AgentId::new(agent))?;
    view.set_period(period);

    let profile = view.profile();
    println!("{} (#{})  {}", profile.name(), profile.rank(), profile.description());
    println!(
        "win {}%  top-3 {}%  record {}  trades {}  profit {}  followers {}  since {}",
        profile.win_rate(),
        profile.top_three_rate(),
        profile.record(),
        profile.total_trades(),
        profile.total_profit(),
        profile.followers(),
        profile.join_date()
    );
    for point in view.series() {
        let marker = if point.is_today() { " (today)" } else { "" };
        println!(
            "  {:<7} {:>10} {:>12} #{}{marker}",
            point.label(),
            point.pnl().signed(),
            point.portfolio(),
            point.rank()
        );
    }
    for note in profile.strategies() {
        let allocation: Vec<String> = note
            .allocation()
            .iter()
            .map(|(asset, pct)| format!("{asset} {pct}%"))
            .collect();
        println!(
            "  {}: {} [{}] {} confidence {}",
            note.day(),
            note.strategy(),
            allocation.join(", "),
            note.leverage(),
            note.confidence()
        );
    }
    Ok(())
}
