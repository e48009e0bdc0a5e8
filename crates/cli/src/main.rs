use anyhow::{Context, Result, anyhow};
use catalog::{CATEGORY, Catalog, IS_NEW, Item, ItemKind, PRICE};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use pipeline::{Page, Query, SortMode, ViewMode, run_query};
use rand::Rng;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Courtside - search and filter marketplace catalogs
#[derive(Parser)]
#[command(name = "courtside")]
#[command(about = "Search, filter and sort pickleball marketplace catalogs", long_about = None)]
struct Cli {
    /// Path to a catalog JSON document
    #[arg(short, long, default_value = "data/catalog.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a query against the catalog
    Search(SearchArgs),

    /// List distinct values of a categorical field
    Categories {
        /// Field to list
        #[arg(long, default_value = CATEGORY)]
        field: String,
    },

    /// Show every attribute of one item
    Show {
        /// Item ID to display
        #[arg(long)]
        id: String,
    },

    /// Time queries over a synthetic catalog
    Benchmark {
        /// Number of synthetic items
        #[arg(long, default_value = "10000")]
        items: usize,

        /// Number of queries to run
        #[arg(long, default_value = "200")]
        iterations: usize,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// JSON file holding a saved Query; flags below override its fields
    #[arg(long)]
    query_file: Option<PathBuf>,

    /// Free text (case-insensitive substring match)
    #[arg(long)]
    text: Option<String>,

    /// Text fields to search (defaults depend on the item kind)
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,

    /// Categorical field the --category value applies to
    #[arg(long, default_value = CATEGORY)]
    category_field: String,

    /// Category value to keep ("all" clears it)
    #[arg(long)]
    category: Option<String>,

    /// Numeric field for --min
    #[arg(long, default_value = PRICE)]
    min_field: String,

    /// Inclusive minimum for --min-field (0 means unset)
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f64>,

    /// Numeric field for --max
    #[arg(long, default_value = PRICE)]
    max_field: String,

    /// Inclusive maximum for --max-field
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,

    /// Flag that must be set (repeatable)
    #[arg(long = "flag")]
    flags: Vec<String>,

    /// featured, price-ascending, price-descending or newest-first
    #[arg(long)]
    sort: Option<SortMode>,

    /// Results per page
    #[arg(long, default_value = "12")]
    page_size: usize,

    /// Zero-based page number
    #[arg(long, default_value = "0")]
    page: usize,

    /// grid, list or compact
    #[arg(long, default_value = "list")]
    view: ViewMode,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Benchmark { items, iterations } = cli.command {
        return handle_benchmark(items, iterations);
    }

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&cli.data)
        .with_context(|| format!("Failed to load catalog from {}", cli.data.display()))?;
    println!(
        "{} Loaded {} items in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search(args) => handle_search(&catalog, args)?,
        Commands::Categories { field } => handle_categories(&catalog, &field),
        Commands::Show { id } => handle_show(&catalog, &id)?,
        Commands::Benchmark { .. } => {}
    }

    Ok(())
}

/// Build the Query from an optional saved query plus command line overrides
fn build_query(args: &SearchArgs) -> Result<Query> {
    let mut query = match &args.query_file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read query file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid query file {}", path.display()))?
        }
        None => Query::new(),
    };

    if let Some(text) = &args.text {
        query = query.search(text.as_str());
    }
    if !args.fields.is_empty() {
        query = query.search_fields(args.fields.iter().map(String::as_str));
    }
    if let Some(category) = &args.category {
        query = query.category_in(args.category_field.as_str(), category.as_str());
    }
    if let Some(min) = args.min {
        query = query.minimum(args.min_field.as_str(), min);
    }
    if let Some(max) = args.max {
        query = query.maximum(args.max_field.as_str(), max);
    }
    for flag in &args.flags {
        query = query.require_flag(flag.as_str());
    }
    if let Some(sort) = args.sort {
        query = query.sort(sort);
    }

    Ok(query)
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, args: SearchArgs) -> Result<()> {
    let query = build_query(&args)?;
    tracing::debug!("Running query: {:?}", query);

    let view = run_query(catalog.items(), &query);
    if view.is_empty_state() {
        println!("{}", "No items match these filters.".yellow());
        return Ok(());
    }

    let page = view.page_number(args.page, args.page_size);
    print_page(&page, args.view);
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog, field: &str) {
    let values = catalog.categories(field);
    println!("{}", format!("Values of '{field}':").bold().blue());
    if values.is_empty() {
        println!("  (none)");
    }
    for (value, count) in values {
        println!("  {} {} ({} items)", "•".green(), value, count);
    }
}

/// Handle the 'show' command
fn handle_show(catalog: &Catalog, id: &str) -> Result<()> {
    let item = catalog
        .get(id)
        .ok_or_else(|| anyhow!("Item {id} not found"))?;

    println!("{}", format!("{} [{}] ({})", item.label(), item.id, item.kind).bold().blue());
    for (key, value) in &item.text {
        println!("{}{}: {}", "• ".green(), key, value);
    }
    for (key, value) in &item.numbers {
        println!("{}{}: {}", "• ".cyan(), key, value);
    }
    for (key, value) in &item.flags {
        println!("{}{}: {}", "• ".magenta(), key, value);
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(items: usize, iterations: usize) -> Result<()> {
    if iterations == 0 {
        return Err(anyhow!("--iterations must be at least 1"));
    }

    let mut rng = rand::rng();
    let catalog = Catalog::from_items(synthetic_catalog(&mut rng, items))
        .context("Failed to build synthetic catalog")?;
    println!("Generated {} synthetic items", catalog.len());

    let searches = ["", "pad", "ball", "pro", "bag"];
    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    let mut matched = 0usize;
    for _ in 0..iterations {
        let mut query = Query::new()
            .search(searches[rng.random_range(0..searches.len())])
            .sort(SortMode::ALL[rng.random_range(0..SortMode::ALL.len())]);
        if rng.random_bool(0.5) {
            query = query.category(CATEGORIES[rng.random_range(0..CATEGORIES.len())]);
        }
        if rng.random_bool(0.3) {
            query = query.require_flag(IS_NEW);
        }

        let start = Instant::now();
        let view = run_query(catalog.items(), &query);
        timings.push(start.elapsed());
        matched += view.len();
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / timings.len() as u32;
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];

    println!("Benchmark results:");
    println!("Total time: {total_time:?}");
    println!("Average latency: {avg_latency:?}");
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Average matches: {:.1}", matched as f32 / iterations as f32);
    println!(
        "Throughput: {:.2} queries/second",
        iterations as f32 / total_time.as_secs_f32().max(f32::EPSILON)
    );

    Ok(())
}

const CATEGORIES: [&str; 4] = ["paddles", "balls", "bags", "apparel"];

fn synthetic_catalog(rng: &mut impl Rng, len: usize) -> Vec<Item> {
    let names = ["Pro Paddle", "Outdoor Ball", "Tour Bag", "Court Shoe", "Grip Tape"];
    (0..len)
        .map(|i| {
            let mut item = Item::new(format!("p{i}"), ItemKind::Product)
                .with_text("name", format!("{} {i}", names[rng.random_range(0..names.len())]))
                .with_text(CATEGORY, CATEGORIES[rng.random_range(0..CATEGORIES.len())])
                .with_flag(IS_NEW, rng.random_bool(0.2));
            // Some listings have no price yet
            if rng.random_bool(0.9) {
                item = item.with_number(PRICE, f64::from(rng.random_range(5u32..300)));
            }
            item
        })
        .collect()
}

/// Header line for a page; a cursor past the end gets no range
fn page_header(page: &Page<'_>) -> String {
    if page.items.is_empty() {
        return format!("No results on this page ({} results in total)", page.total);
    }
    format!(
        "Showing {}-{} of {} results:",
        page.cursor + 1,
        page.cursor + page.items.len(),
        page.total
    )
}

/// Print one page of results in the requested layout
fn print_page(page: &Page<'_>, mode: ViewMode) {
    println!("{}", page_header(page).bold().blue());
    if page.items.is_empty() {
        return;
    }

    match mode {
        ViewMode::Compact => {
            let labels: Vec<&str> = page.items.iter().map(|item| item.label()).collect();
            println!("{}", labels.join(" | "));
        }
        ViewMode::Grid => {
            for row in page.items.chunks(3) {
                let cells: Vec<String> = row
                    .iter()
                    .map(|item| format!("{:<28}", truncate(item.label(), 26)))
                    .collect();
                println!("{}", cells.join(""));
            }
        }
        ViewMode::List => {
            for (offset, item) in page.items.iter().enumerate() {
                let rank = page.cursor + offset + 1;
                let price = item
                    .price()
                    .map(|p| format!("${p:.2}"))
                    .unwrap_or_else(|| "-".to_string());
                let badge = if item.flag(IS_NEW) == Some(true) {
                    " NEW".yellow().to_string()
                } else {
                    String::new()
                };
                println!(
                    "{}. {} [{}] {} {}{}",
                    rank.to_string().green(),
                    item.label(),
                    item.id,
                    item.category().unwrap_or("-"),
                    price,
                    badge
                );
            }
        }
    }

    if let Some(next) = page.next_cursor {
        println!("More results available (next page starts at {})", next + 1);
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
