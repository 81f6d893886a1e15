//! Metapath CLI
//!
//! Command-line front end for the sub-pathway engine:
//! - Ranking the sub-pathways of a KEGG map from a seed compound (`best`)
//! - Listing every candidate chain in enumeration order (`enumerate`)
//! - Inspecting the feature/cost breakdown of one reaction (`cost`)
//!
//! The engine itself is pure; this binary owns the KEGG REST fetches, the
//! politeness delay and the terminal/JSON presentation.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use metapath_core::{
    enumerate_subpathways, extract_features, score_chain, select_best, CofactorSet, DfsLimits,
    Direction, ReactionNetwork, ReactionRecord, ScoredChain, Weights,
};
use metapath_kegg::{highlight_url, load_records, KeggClient, RecordSource};

#[derive(Parser)]
#[command(name = "metapath")]
#[command(
    author,
    version,
    about = "Sub-pathway enumeration and cost ranking over KEGG maps"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the minimum-cost sub-pathway for a seed compound in a map.
    Best(BestArgs),

    /// List every candidate sub-pathway with its total cost, in enumeration
    /// order.
    Enumerate(EnumerateArgs),

    /// Show the feature breakdown and cost of a single reaction.
    Cost(CostArgs),
}

#[derive(Args)]
struct MapArgs {
    /// KEGG pathway map id (e.g. map00720).
    #[arg(long)]
    map: String,

    /// Seed compound id (e.g. C00022 for pyruvate).
    #[arg(long)]
    compound: String,

    /// Maximum chain length; unlimited when omitted. Cyclic maps need one.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Maximum number of candidate chains to enumerate.
    #[arg(long)]
    max_paths: Option<usize>,
}

impl MapArgs {
    fn limits(&self) -> DfsLimits {
        DfsLimits {
            max_depth: self.max_depth,
            max_paths: self.max_paths,
        }
    }
}

/// Per-feature weight overrides; anything not given keeps its default.
#[derive(Args)]
struct WeightArgs {
    /// Weight for the ATP-equivalent delta.
    #[arg(long)]
    alpha: Option<f64>,

    /// Weight for the redox ATP-equivalent delta.
    #[arg(long)]
    beta: Option<f64>,

    /// Weight for O2 consumption.
    #[arg(long)]
    gamma: Option<f64>,

    /// Weight for CO2 release.
    #[arg(long)]
    delta: Option<f64>,

    /// Weight for complexity.
    #[arg(long)]
    epsilon: Option<f64>,

    /// Weight for precedent.
    #[arg(long)]
    zeta: Option<f64>,
}

impl WeightArgs {
    /// Resolve overrides against the defaults and validate before any
    /// scoring happens.
    fn resolve(&self) -> Result<Weights> {
        let mut weights = Weights::default();
        if let Some(alpha) = self.alpha {
            weights.alpha = alpha;
        }
        if let Some(beta) = self.beta {
            weights.beta = beta;
        }
        if let Some(gamma) = self.gamma {
            weights.gamma = gamma;
        }
        if let Some(delta) = self.delta {
            weights.delta = delta;
        }
        if let Some(epsilon) = self.epsilon {
            weights.epsilon = epsilon;
        }
        if let Some(zeta) = self.zeta {
            weights.zeta = zeta;
        }
        weights.validate().context("rejecting weight overrides")?;
        Ok(weights)
    }
}

#[derive(Args)]
struct BestArgs {
    #[command(flatten)]
    map: MapArgs,

    #[command(flatten)]
    weights: WeightArgs,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Also print the KEGG show_pathway highlight URL.
    #[arg(long)]
    url: bool,
}

#[derive(Args)]
struct EnumerateArgs {
    #[command(flatten)]
    map: MapArgs,

    #[command(flatten)]
    weights: WeightArgs,
}

#[derive(Args)]
struct CostArgs {
    /// KEGG reaction id (e.g. R00199).
    #[arg(long)]
    reaction: String,

    /// Score the reverse orientation of the equation.
    #[arg(long)]
    reverse: bool,

    #[command(flatten)]
    weights: WeightArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let client = KeggClient::new();

    match cli.command {
        Commands::Best(args) => best(&client, args).await,
        Commands::Enumerate(args) => enumerate(&client, args).await,
        Commands::Cost(args) => cost(&client, args).await,
    }
}

/// Fetch a map's reactions and build the in-memory network, bulk-loading
/// every entry up front.
async fn build_network(source: &dyn RecordSource, map: &str) -> Result<ReactionNetwork> {
    let ids = source
        .reactions_in_map(map)
        .await
        .with_context(|| format!("fetching reactions of {map}"))?;
    anyhow::ensure!(!ids.is_empty(), "map {map} has no reactions");
    let records = load_records(source, &ids).await;
    Ok(ReactionNetwork::build(records, CofactorSet::default()))
}

fn chain_reaction_ids(network: &ReactionNetwork, chain: &ScoredChain) -> Vec<String> {
    chain
        .steps
        .iter()
        .map(|s| network.record(s.step.reaction).id.clone())
        .collect()
}

fn print_chain(network: &ReactionNetwork, chain: &ScoredChain) {
    for scored in &chain.steps {
        let record = network.record(scored.step.reaction);
        let f = &scored.features;
        println!(
            "  {}  atp={:>6.2}  redox={:>6.2}  o2={:>5.2}  co2={:>5.2}  cx={:>4.0}  prec={:>5.2}  cost={}",
            record.id.cyan(),
            f.atp_eq,
            f.redox_atp_eq,
            f.o2_consumed,
            f.co2_released,
            f.complexity,
            f.precedent,
            format!("{:.3}", scored.cost).yellow(),
        );
    }
    println!("  total: {}", format!("{:.3}", chain.total).green().bold());
}

async fn best(client: &KeggClient, args: BestArgs) -> Result<()> {
    let weights = args.weights.resolve()?;
    let network = build_network(client, &args.map.map).await?;

    let candidates = enumerate_subpathways(&network, &args.map.compound, args.map.limits());
    let best = select_best(
        candidates
            .iter()
            .map(|p| score_chain(&network, p, &weights, network.cofactors())),
    )
    .with_context(|| {
        format!(
            "no sub-pathways start from {} in {}",
            args.map.compound, args.map.map
        )
    })?;

    let reaction_ids = chain_reaction_ids(&network, &best);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&best)?);
    } else {
        println!(
            "{} {} candidate chains from {}",
            "ranked".bold(),
            candidates.len(),
            args.map.compound.cyan()
        );
        print_chain(&network, &best);
    }
    if args.url {
        println!(
            "{}",
            highlight_url(&args.map.map, &reaction_ids, &args.map.compound)
        );
    }
    Ok(())
}

async fn enumerate(client: &KeggClient, args: EnumerateArgs) -> Result<()> {
    let weights = args.weights.resolve()?;
    let network = build_network(client, &args.map.map).await?;

    let candidates = enumerate_subpathways(&network, &args.map.compound, args.map.limits());
    if candidates.is_empty() {
        println!(
            "no sub-pathways start from {} in {}",
            args.map.compound, args.map.map
        );
        return Ok(());
    }
    for (i, pathway) in candidates.iter().enumerate() {
        let scored = score_chain(&network, pathway, &weights, network.cofactors());
        let ids = chain_reaction_ids(&network, &scored).join(" -> ");
        println!("{:>4}  {:>8.3}  {}", i + 1, scored.total, ids);
    }
    Ok(())
}

async fn cost(client: &KeggClient, args: CostArgs) -> Result<()> {
    let weights = args.weights.resolve()?;
    let entry = client
        .reaction_entry(&args.reaction)
        .await
        .with_context(|| format!("fetching {}", args.reaction))?;
    let record = ReactionRecord::new(
        args.reaction.clone(),
        entry.equation_text.clone(),
        entry.pathway_count(),
    );
    if record.is_isolated() {
        println!(
            "{} {} has no parseable equation; features are neutral",
            "note:".yellow(),
            args.reaction
        );
    }

    let direction = if args.reverse {
        Direction::Reverse
    } else {
        Direction::Forward
    };
    let features = extract_features(&record, direction, &CofactorSet::default());
    let cost = weights.step_cost(&features);

    println!("{}  {}", args.reaction.cyan().bold(), record.equation_text);
    println!("  direction:    {:?}", direction);
    println!("  atp_eq:       {:.3}", features.atp_eq);
    println!("  redox_atp_eq: {:.3}", features.redox_atp_eq);
    println!("  o2_consumed:  {:.3}", features.o2_consumed);
    println!("  co2_released: {:.3}", features.co2_released);
    println!("  complexity:   {:.0}", features.complexity);
    println!("  precedent:    {:.3}", features.precedent);
    println!("  cost:         {}", format!("{cost:.3}").green().bold());
    Ok(())
}
