// Recipe picker: diagnostic entry point
//
// Purpose: Load a catalog, select a recipe and print its explanation
// Example: pick_recipe data/sample_catalog.json small_bed full_sun cooking

use clap::Parser;
use garden_recipe_rust::explanation::{ExplanationGenerator, JsonFormatter, MarkdownFormatter};
use garden_recipe_rust::{Catalog, Goal, RecipeRequest, RecipeSelector, RuleTables, SpaceTier, SunTier};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pick_recipe")]
#[command(about = "Pick a compatible plant recipe for a space, sun and goal")]
#[command(version)]
struct Args {
    /// Species catalog (.json, .csv or .parquet)
    catalog: PathBuf,

    /// Space tier: pot, balcony, small_bed, large_bed
    space: SpaceTier,

    /// Sun tier: full_sun, part_sun, shade
    sun: SunTier,

    /// Goal: cooking, herbal, pollinators, harvest
    goal: Goal,

    /// Rule table JSON replacing the built-in tables
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Print the explanation as JSON instead of Markdown
    #[arg(long)]
    json: bool,
}

impl Args {
    fn request(&self) -> RecipeRequest {
        RecipeRequest::new(self.space, self.sun, self.goal)
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "garden_recipe_rust=info,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let request = args.request();

    let rules = match &args.rules {
        Some(path) => Arc::new(RuleTables::load(path)?),
        None => RuleTables::builtin(),
    };

    let load_start = Instant::now();
    let catalog = Catalog::load_with_rules(&args.catalog, rules)?;
    tracing::info!("Catalog ready in {:?}", load_start.elapsed());

    let select_start = Instant::now();
    let recipe = RecipeSelector::new(&catalog).select(request);
    tracing::info!(
        "Selected {}/{} plants for {} / {} / {} in {:?}",
        recipe.len(),
        recipe.max_plants,
        request.space,
        request.sun,
        request.goal,
        select_start.elapsed()
    );

    let explanation = ExplanationGenerator::generate(&recipe, catalog.rules());

    if args.json {
        println!("{}", JsonFormatter::format(&explanation)?);
    } else {
        println!("{}", "=".repeat(70));
        print!("{}", MarkdownFormatter::format(&explanation));
        println!("{}", "=".repeat(70));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_positional_and_flags() {
        let args = Args::try_parse_from([
            "pick_recipe",
            "catalog.json",
            "small",
            "partial",
            "flowers",
            "--rules",
            "rules.json",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.catalog, PathBuf::from("catalog.json"));
        assert_eq!(
            args.request(),
            RecipeRequest::new(SpaceTier::SmallBed, SunTier::PartSun, Goal::Pollinators)
        );
        assert_eq!(args.rules, Some(PathBuf::from("rules.json")));
        assert!(args.json);
    }

    #[test]
    fn test_flags_default_off() {
        let args =
            Args::try_parse_from(["pick_recipe", "c.csv", "pot", "shade", "harvest"]).unwrap();
        assert_eq!(args.rules, None);
        assert!(!args.json);
    }

    #[test]
    fn test_rejects_unknown_tier() {
        let err = Args::try_parse_from(["pick_recipe", "c.json", "yard", "shade", "harvest"])
            .unwrap_err();
        assert!(err.to_string().contains("yard"));
    }

    #[test]
    fn test_rejects_missing_positional() {
        assert!(Args::try_parse_from(["pick_recipe", "c.json", "pot", "shade"]).is_err());
    }

    #[test]
    fn test_rules_flag_needs_value() {
        assert!(
            Args::try_parse_from(["pick_recipe", "c.json", "pot", "shade", "harvest", "--rules"])
                .is_err()
        );
    }
}
