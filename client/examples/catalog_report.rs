use std::env;
use std::time::Duration;

use anyhow::Result;
use pokego_client::{
    CatalogQuery, Generation, Loader, LoaderConfig, POKEAPI_URL, SortOrder, Team, TeamMode,
};

#[tokio::main]
async fn main() -> Result<()> {
    let url = env::args().nth(1).unwrap_or_else(|| POKEAPI_URL.to_string());
    let max_species = env::args()
        .nth(2)
        .map(|n| n.parse::<u32>())
        .transpose()?
        .unwrap_or(151);

    let config = LoaderConfig::default()
        .with_base_url(url.as_str())
        .with_max_species(max_species)
        .with_timeout(Duration::from_secs(120));

    println!("Loading up to {max_species} species from {url}...");
    let outcome = Loader::pokeapi(config)
        .load_all_with_progress(|p| {
            if p.settled % 25 == 0 || p.settled == p.requested {
                println!("  {:>3.0}% ({}/{})", p.fraction() * 100.0, p.settled, p.requested);
            }
        })
        .await;

    let report = outcome.report;
    println!("Loaded {}/{} ({} failed)\n", report.loaded, report.requested, report.failed());

    let catalog = outcome.catalog;
    let query = CatalogQuery::new()
        .generation(Generation::Kanto)
        .sort(SortOrder::NameAscending);

    println!("=== {} ===", Generation::Kanto);
    for species in catalog.query(&query).into_iter().take(10) {
        let types: Vec<String> = species.types.iter().map(|t| t.to_string()).collect();
        println!(
            "#{:03} {:<12} {:<16} atk {:>3} def {:>3} sta {:>3}",
            species.id,
            species.name,
            types.join("/"),
            species.combat_stats.attack,
            species.combat_stats.defense,
            species.combat_stats.stamina,
        );
    }

    let mut team = Team::new(TeamMode::Pvp);
    for id in [3, 6, 9] {
        if let Some(species) = catalog.get(id) {
            team.add(species.clone())?;
        }
    }

    let analysis = team.analyze();
    println!("\n=== Team ({}) ===", team.len());
    println!("Strong against: {:?}", analysis.top_strengths);
    println!("Weak to:        {:?}", analysis.top_weaknesses);

    Ok(())
}
