//! Resonance Planner - Entry Point
//!
//! Command-line front end over the planning library: pick a character
//! and/or weapon, describe the level ranges and node states, optionally
//! point at an inventory file, and get the consolidated material list with
//! its Waveplate cost estimate.

use clap::Parser;
use std::path::PathBuf;

use resonance_planner::catalog::MaterialCatalog;
use resonance_planner::core::{PlannerError, Result};
use resonance_planner::planner::plan::{SKILL_COUNT, STAT_NODE_COUNT};
use resonance_planner::planner::{compute_plan, Inventory, NodeState, PlanRequest, PlanSummary};
use resonance_planner::roster::Roster;

/// Material and Waveplate cost planner for resonator and weapon progression
#[derive(Parser, Debug)]
#[command(name = "resonance-planner")]
#[command(about = "Compute progression materials and their Waveplate farming cost")]
struct Args {
    /// Character id (see --list)
    #[arg(long)]
    character: Option<String>,

    /// Weapon id (see --list)
    #[arg(long)]
    weapon: Option<String>,

    /// Current character level
    #[arg(long, default_value_t = 1)]
    char_current: u32,

    /// Target character level
    #[arg(long, default_value_t = 90)]
    char_target: u32,

    /// Current weapon level
    #[arg(long, default_value_t = 1)]
    weapon_current: u32,

    /// Target weapon level
    #[arg(long, default_value_t = 90)]
    weapon_target: u32,

    /// Current levels of the five skills, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [1, 1, 1, 1, 1])]
    skills: Vec<u32>,

    /// Target levels of the five skills, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [10, 10, 10, 10, 10])]
    target_skills: Vec<u32>,

    /// Planned tiers of the four stat nodes, comma separated; each entry
    /// is two 0/1 flags for tier 1 and tier 2 (e.g. 11,11,10,01)
    #[arg(long, value_delimiter = ',', default_values = ["11", "11", "11", "11"])]
    stat_nodes: Vec<String>,

    /// Planned inherent-skill tiers, same two-flag form
    #[arg(long, default_value = "11")]
    inherent: String,

    /// TOML file of owned material counts ("Name" = count)
    #[arg(long)]
    inventory: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// List character and weapon ids and exit
    #[arg(long)]
    list: bool,
}

fn parse_node_state(flags: &str) -> Option<NodeState> {
    let mut chars = flags.chars();
    let tier_one = chars.next()?;
    let tier_two = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let as_bool = |c: char| match c {
        '0' => Some(false),
        '1' => Some(true),
        _ => None,
    };
    Some(NodeState::new(as_bool(tier_one)?, as_bool(tier_two)?))
}

fn print_summary(summary: &PlanSummary) {
    println!(
        "{:<34} {:>10} {:>10} {:>10}",
        "Material", "Required", "Owned", "Needed"
    );
    for requirement in &summary.requirements {
        println!(
            "{:<34} {:>10} {:>10} {:>10}",
            requirement.material.name, requirement.required, requirement.owned, requirement.needed
        );
    }
    println!();
    for (source, waveplates) in &summary.waveplates_by_source {
        println!("{:<34} {:>10.0}", source.display_name(), waveplates);
    }
    println!(
        "{:<34} {:>10.0}",
        "Total Waveplates", summary.total_waveplates
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("resonance_planner=warn")
        .init();

    let args = Args::parse();

    let catalog = MaterialCatalog::new();
    let roster = Roster::load(&catalog)?;
    tracing::debug!(
        characters = roster.characters().len(),
        weapons = roster.weapons().len(),
        "data loaded"
    );

    if args.list {
        println!("Characters:");
        for character in roster.characters() {
            println!(
                "  {:<24} {} ({}*)",
                character.id, character.name, character.rarity
            );
        }
        println!("Weapons:");
        for weapon in roster.weapons() {
            println!("  {:<24} {} ({}*)", weapon.id, weapon.name, weapon.rarity);
        }
        return Ok(());
    }

    let mut request = PlanRequest::new();
    if let Some(id) = &args.character {
        request.character = Some(
            roster
                .character(id)
                .ok_or_else(|| PlannerError::UnknownCharacter(id.clone()))?,
        );
    }
    if let Some(id) = &args.weapon {
        request.weapon = Some(
            roster
                .weapon(id)
                .ok_or_else(|| PlannerError::UnknownWeapon(id.clone()))?,
        );
    }
    request.character_levels = (args.char_current, args.char_target);
    request.weapon_levels = (args.weapon_current, args.weapon_target);

    for slot in 0..SKILL_COUNT {
        let current = args.skills.get(slot).copied().unwrap_or(1);
        let target = args.target_skills.get(slot).copied().unwrap_or(current);
        request.skills[slot] = (current, target);
    }
    for slot in 0..STAT_NODE_COUNT {
        let flags = args
            .stat_nodes
            .get(slot)
            .map(String::as_str)
            .unwrap_or("00");
        request.stat_nodes[slot] = parse_node_state(flags).unwrap_or_else(|| {
            tracing::warn!(flags, slot, "unrecognised stat-node flags, treating as none");
            NodeState::default()
        });
    }
    request.inherent_skill = parse_node_state(&args.inherent).unwrap_or_else(|| {
        tracing::warn!(
            flags = args.inherent.as_str(),
            "unrecognised inherent-skill flags, treating as none"
        );
        NodeState::default()
    });

    let inventory = match &args.inventory {
        Some(path) => Inventory::load_from_toml(path)?,
        None => Inventory::new(),
    };

    let summary = compute_plan(&request, &inventory, &catalog);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}
