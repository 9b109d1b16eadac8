use chrono::NaiveDate;
use rust_decimal::Decimal;
use team_registry::TeamRegistry;
use tracing::{info, Level};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Testing TeamRegistry...");

    let mut registry = TeamRegistry::new();

    registry.register_team(
        1,
        "Flamengo".to_string(),
        date(1895, 11, 17),
        "red".to_string(),
        "black".to_string(),
    )?;
    registry.register_team(
        2,
        "Vasco".to_string(),
        date(1898, 8, 21),
        "white".to_string(),
        "black".to_string(),
    )?;
    registry.register_team(
        3,
        "Internacional".to_string(),
        date(1909, 4, 4),
        "red".to_string(),
        "white".to_string(),
    )?;

    registry.register_player(
        10,
        1,
        "Gabriel".to_string(),
        date(1996, 8, 30),
        8,
        Decimal::new(500_000_00, 2),
    )?;
    registry.register_player(
        11,
        1,
        "Bruno".to_string(),
        date(1991, 2, 9),
        8,
        Decimal::new(450_000_00, 2),
    )?;
    registry.register_player(
        20,
        2,
        "Vegetti".to_string(),
        date(1988, 12, 13),
        6,
        Decimal::new(200_000_00, 2),
    )?;
    registry.register_player(
        30,
        3,
        "Valencia".to_string(),
        date(1994, 11, 4),
        7,
        Decimal::new(300_000_00, 2),
    )?;

    info!(
        "Registry loaded with {} teams and {} players",
        registry.team_count(),
        registry.player_count()
    );

    // Top players across the registry
    let top = registry.top_players(10);
    println!("\nTop Players by Skill Level:");
    println!("Rank Name                 Team            Skill  Salary");
    println!("--------------------------------------------------------");
    for (i, id) in top.iter().enumerate() {
        let player = registry.player(*id)?;
        let team = registry.team(player.team_id)?;
        println!(
            "{:4} {:20} {:15} {:5} {:>12}",
            i + 1,
            player.name,
            team.name,
            player.skill_level,
            player.salary
        );
    }

    // Per-team rankings
    println!("\nPer-team picks:");
    for team_id in registry.teams() {
        let name = registry.team_name(team_id)?.to_string();
        let best = registry.best_player(team_id)?;
        let oldest = registry.oldest_player(team_id)?;
        let paid = match registry.highest_paid_player(team_id)? {
            Some(id) => registry.player_name(id)?.to_string(),
            None => "-".to_string(),
        };
        println!(
            "  {:15} best={} oldest={} highest_paid={}",
            name,
            registry.player_name(best)?,
            registry.player_name(oldest)?,
            paid
        );
    }

    // Captain assignment
    registry.set_captain(10)?;
    println!("\nCaptain of team 1: player {}", registry.captain_of(1)?);

    // Jersey color disambiguation
    println!("\nJersey colors:");
    println!("  Vasco away at Flamengo: {}", registry.away_jersey_color(1, 2)?);
    println!("  Internacional away at Flamengo: {}", registry.away_jersey_color(1, 3)?);

    // Name search
    println!("\nSearching for 'gab':");
    for player in registry.search_players("gab") {
        println!("  {} (team {})", player.name, player.team_id);
    }

    // Full team record as JSON
    println!("\nTeam 1 record:");
    println!("{}", serde_json::to_string_pretty(registry.team(1)?)?);

    info!("TeamRegistry test completed successfully!");
    Ok(())
}
