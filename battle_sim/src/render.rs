//! Text rendering of battle state and events

use battle_core::{Battle, BattleEvent, Hero, Party, Side};

/// One status line for a hero: slot, name, health and stance
pub fn hero_line(slot: usize, hero: &Hero) -> String {
    let status = if !hero.is_alive() {
        " [dead]"
    } else if hero.is_defending() {
        " [defending]"
    } else {
        ""
    };
    format!(
        "  {} {:<16} {:>3}/{:<3}{}",
        slot,
        hero.name(),
        hero.current_health(),
        hero.max_health(),
        status
    )
}

fn print_party(title: &str, party: &Party) {
    println!("{}", title);
    for (slot, hero) in party.heroes().iter().enumerate() {
        println!("{}", hero_line(slot, hero));
    }
}

pub fn print_parties(battle: &Battle) {
    println!();
    print_party("Your party:", battle.controlled_party());
    print_party("Enemies:", battle.enemy_party());
}

pub fn print_event(event: &BattleEvent) {
    match event {
        BattleEvent::RoundStarted { round } => println!("\n=== Round {} ===", round),
        BattleEvent::Move(outcome) => {
            let marker = match outcome.actor.side {
                Side::Controlled => ">",
                Side::Enemy => "<",
            };
            println!("{} {}", marker, outcome.summary());
            // Cluster lists every target under the summary
            if outcome.hits.len() > 1 {
                for line in outcome.hit_messages() {
                    println!("    {}", line);
                }
            }
        }
        other => println!("{}", other.message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::HeroStats;

    #[test]
    fn test_hero_line_states() {
        let mut hero = Hero::new("Ghost", HeroStats::new(85, 65, 50, 70, 75, 65, 30), "ghost.png").unwrap();
        assert!(hero_line(3, &hero).contains("85/85"));

        hero.defend();
        assert!(hero_line(3, &hero).ends_with("[defending]"));

        hero.die();
        let line = hero_line(3, &hero);
        assert!(line.contains("0/85"));
        assert!(line.ends_with("[dead]"));
    }
}
