//! Console presentation of a battle

use inventory_core::{BattleObserver, Combatant, PlayerAction, TurnReport};
use std::io::{self, Write};

/// Prints the menu before each player choice and a health line after each turn
pub struct ConsoleObserver;

impl BattleObserver for ConsoleObserver {
    fn on_prompt(&mut self, player: &Combatant, enemy: &Combatant) {
        println!();
        println!("{}", status_line(player));
        println!("{}", status_line(enemy));
        println!("Choose an action:");
        for (key, label) in PlayerAction::menu() {
            println!("{}. {}", key, label);
        }
        print!("> ");
        let _ = io::stdout().flush();
    }

    fn on_turn(&mut self, report: &TurnReport) {
        println!("  {}", report.summary());
    }
}

fn status_line(combatant: &Combatant) -> String {
    let mut line = format!(
        "{}: {}/{} HP, DEF {}",
        combatant.name,
        combatant.health(),
        combatant.max_health(),
        combatant.defense
    );
    if !combatant.active_effects().is_empty() {
        let effects: Vec<String> = combatant
            .active_effects()
            .iter()
            .map(|e| format!("{} ({})", e.name, e.remaining))
            .collect();
        line.push_str(&format!(" [{}]", effects.join(", ")));
    }
    line
}
