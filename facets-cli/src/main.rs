use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use facets_common::{
    base_map, format_categories_tree, mount_options, pages_args, CategoryTreeNode, FacetOption,
    FacetSettings, FilterGroup, FilterPanel, FilterType, MessageCatalog, PagesArgs,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info};

/// facets: storefront filter link tooling
#[derive(Parser)]
#[command(name = "facets")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Navigation target for clicking a filter option.
    Link {
        /// JSON click request (`-` for stdin).
        request: PathBuf,
    },
    /// Map symbols not taken by the current rest values.
    BaseMap {
        #[arg(long, default_value = "")]
        map: String,
        #[arg(long, default_value = "")]
        rest: String,
    },
    /// Mark facet options as selected under the current map and rest.
    Options {
        /// Facet type: Categories, Brands, PriceRanges or SpecificationFilters.
        #[arg(long = "type")]
        filter_type: FilterType,
        #[arg(long, default_value = "")]
        map: String,
        #[arg(long, default_value = "")]
        rest: String,
        /// JSON array of options (`-` for stdin).
        options: PathBuf,
    },
    /// Flatten a category tree.
    Tree {
        /// JSON array of category nodes (`-` for stdin).
        tree: PathBuf,
    },
    /// Localized title of a filter group.
    Title {
        /// JSON message catalog.
        #[arg(long, env = "FACETS_CATALOG")]
        catalog: PathBuf,
        title: String,
    },
    /// Facets a filter group renders under the store settings.
    Panel {
        /// YAML store settings.
        #[arg(long, env = "FACETS_SETTINGS")]
        settings: Option<PathBuf>,
        /// JSON message catalog for the see more/less label.
        #[arg(long, env = "FACETS_CATALOG")]
        catalog: Option<PathBuf>,
        #[arg(long)]
        title: String,
        /// Total facets of the group, defaults to the number given.
        #[arg(long)]
        quantity: Option<usize>,
        /// Search term typed into the group's search bar.
        #[arg(long, default_value = "")]
        search: String,
        /// The facet list has been scrolled.
        #[arg(long)]
        scrolled: bool,
        /// Show the full list of a truncated group.
        #[arg(long)]
        expanded: bool,
        /// JSON array of facet options (`-` for stdin).
        facets: PathBuf,
    },
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries the JSON output
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    configure_logging();
    let args = Args::parse();

    match args.command {
        Command::Link { request } => {
            let request: PagesArgs = read_json(&request);
            debug!(
                "{} {} filter {:?} on {}",
                if request.is_unselect_link { "Unselecting" } else { "Selecting" },
                request.filter_type,
                request.name,
                request.pages_path.as_str()
            );
            let target = pages_args(&request);
            let query_string = target.query.to_query_string();
            print_json(&serde_json::json!({
                "target": target,
                "queryString": query_string,
            }));
        }
        Command::BaseMap { map, rest } => {
            println!("{}", base_map(&map, &rest));
        }
        Command::Options {
            filter_type,
            map,
            rest,
            options,
        } => {
            let options: Vec<FacetOption> = read_json(&options);
            let mounted = mount_options(&options, filter_type, &map, &rest);
            info!(
                "{} of {} {filter_type} options selected",
                mounted.iter().filter(|o| o.selected).count(),
                mounted.len()
            );
            print_json(&mounted);
        }
        Command::Tree { tree } => {
            let tree: Vec<CategoryTreeNode> = read_json(&tree);
            print_json(&format_categories_tree(&tree));
        }
        Command::Title { catalog, title } => {
            let catalog = load_catalog(&catalog);
            println!("{}", catalog.filter_title(&title));
        }
        Command::Panel {
            settings,
            catalog,
            title,
            quantity,
            search,
            scrolled,
            expanded,
            facets,
        } => {
            let settings = match settings {
                Some(path) => FacetSettings::load(&path).unwrap_or_else(|e| {
                    error!("Failed to load settings from {}: {e}", path.display());
                    std::process::exit(1);
                }),
                None => FacetSettings::default(),
            };
            let catalog = catalog.map(|path| load_catalog(&path)).unwrap_or_default();
            let facets: Vec<FacetOption> = read_json(&facets);

            let mut panel = FilterPanel::new(settings);
            let mut group = FilterGroup::new(title, quantity.unwrap_or(facets.len()));
            group.set_search_term(search);
            if scrolled {
                group.mark_scrolled();
            }
            if expanded {
                panel.toggle_truncated(&mut group);
            }

            let window = panel.visible_facets(&group, &facets);
            let toggle_label = window.toggle.map(|toggle| {
                catalog.format(
                    toggle.message_id,
                    &[("quantity", toggle.quantity.to_string())],
                )
            });
            print_json(&serde_json::json!({
                "title": catalog.filter_title(group.title()),
                "open": panel.is_open(&group),
                "searchBar": panel.shows_search_bar(facets.len()),
                "window": window,
                "toggleLabel": toggle_label,
            }));
        }
    }
}

fn read_input(path: &Path) -> String {
    let result = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        error!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> T {
    let content = read_input(path);
    serde_json::from_str(&content).unwrap_or_else(|e| {
        error!("Invalid JSON in {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn load_catalog(path: &Path) -> MessageCatalog {
    MessageCatalog::load(path).unwrap_or_else(|e| {
        error!("Failed to load message catalog from {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}
