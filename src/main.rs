use clap::{Parser, Subcommand};
use simple_docs::{config, generate, output, process, scan, search};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-docs")]
#[command(about = "Static site generator for Markdown documentation")]
#[command(long_about = "\
Static site generator for Markdown documentation

Your filesystem is the data source. The directory tree becomes the
sidebar navigation, file paths become URL slugs, and YAML frontmatter
carries titles, descriptions, tags, and draft flags.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── assets/                      # Static assets → copied to output root
  ├── introduction.md              # Top-level page (slug: introduction)
  ├── faqs.mdx                     # MDX files are scanned like markdown
  └── guide/
      ├── index.md                 # Section page (slug: guide)
      ├── setup.md                 # Nested page (slug: guide/setup)
      └── advanced/
          └── tuning.md            # slug: guide/advanced/tuning

Sidebar order comes from `menu_order` in config.toml; unlisted entries
keep scan order. Draft pages are built and searchable but dimmed in the
sidebar and excluded from sitemap.xml.

Run 'simple-docs gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".simple-docs-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory into a manifest
    Scan,
    /// Produce the HTML site from a previously scanned manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Query the fuzzy search index from the terminal
    Search {
        /// Query text
        query: String,
    },
    /// Generate optimized AVIF/WebP/PNG variants for configured images
    Images,
    /// Validate the content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(cli.temp_dir.join("manifest.json"), json)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            generate::generate(&manifest_path, &cli.source, &cli.output)?;
            let manifest_content = std::fs::read_to_string(&manifest_path)?;
            let manifest: scan::Manifest = serde_json::from_str(&manifest_content)?;
            output::print_generate_output(&manifest);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(cli.temp_dir.join("manifest.json"), json)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            generate::generate_from_manifest(&manifest, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Search { query } => {
            let manifest = scan::scan(&cli.source)?;
            let index = search::SearchIndex::build(&manifest.documents, &manifest.config.search);
            let hits = index.query(&query);
            output::print_search_results(&hits);
        }
        Command::Images => {
            let config = config::load_config(&cli.source)?;
            init_thread_pool(&config.processing);
            let summary = process::process(&config.images, &cli.source)?;
            output::print_process_summary(&summary);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
