//! CombatSystem - Alternating player/enemy turns until one side falls

use super::result::{CombatAction, CombatOutcome, Side, TurnReport};
use super::{CombatError, CombatPhase, Combatant};
use crate::effect::{EffectKind, EffectRegistry, EffectTickResult};
use log::{info, warn};
use rand::Rng;
use std::io::BufRead;

/// Player menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Poison,
    Regenerate,
    Skip,
}

impl PlayerAction {
    /// Parse a menu choice ("1" to "4"); anything else is not a choice
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(PlayerAction::Attack),
            "2" => Some(PlayerAction::Poison),
            "3" => Some(PlayerAction::Regenerate),
            "4" => Some(PlayerAction::Skip),
            _ => None,
        }
    }

    /// Menu entries in choice order
    pub fn menu() -> &'static [(&'static str, &'static str)] {
        &[
            ("1", "Attack"),
            ("2", "Apply Poison"),
            ("3", "Apply Regeneration"),
            ("4", "Skip Turn"),
        ]
    }
}

/// Enemy moves, picked uniformly at random
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    Attack,
    Burn,
    Regenerate,
}

impl EnemyAction {
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => EnemyAction::Attack,
            1 => EnemyAction::Burn,
            _ => EnemyAction::Regenerate,
        }
    }
}

/// Hooks for presenting a battle
pub trait BattleObserver {
    /// The player is about to be asked for a choice
    fn on_prompt(&mut self, _player: &Combatant, _enemy: &Combatant) {}

    /// A turn has finished
    fn on_turn(&mut self, _report: &TurnReport) {}
}

impl BattleObserver for () {}

/// Two-party battle
pub struct CombatSystem<R: Rng> {
    player: Combatant,
    enemy: Combatant,
    registry: EffectRegistry,
    phase: CombatPhase,
    turn: u32,
    rng: R,
}

impl<R: Rng> CombatSystem<R> {
    /// Start a battle with the built-in status effects; the player moves first
    pub fn new(player: Combatant, enemy: Combatant, rng: R) -> Self {
        let phase = if player.is_alive() && enemy.is_alive() {
            CombatPhase::PlayerTurn
        } else {
            CombatPhase::Resolved
        };

        CombatSystem {
            player,
            enemy,
            registry: EffectRegistry::with_defaults(),
            phase,
            turn: 0,
            rng,
        }
    }

    /// Use a custom effect registry
    pub fn with_registry(mut self, registry: EffectRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    /// Turns taken so far by both sides
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == CombatPhase::Resolved
    }

    /// The surviving side, once the battle is over
    pub fn winner(&self) -> Option<Side> {
        self.is_resolved().then(|| self.surviving_side())
    }

    pub fn outcome(&self) -> Option<CombatOutcome> {
        self.is_resolved().then(|| self.finish())
    }

    fn surviving_side(&self) -> Side {
        if self.player.is_alive() {
            Side::Player
        } else {
            Side::Enemy
        }
    }

    fn finish(&self) -> CombatOutcome {
        let winner = self.surviving_side();
        CombatOutcome {
            winner,
            winner_name: self.combatant(winner).name.clone(),
            turns: self.turn,
        }
    }

    fn expect_phase(&self, expected: CombatPhase) -> Result<(), CombatError> {
        if self.phase != expected {
            return Err(CombatError::OutOfTurn {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    // === Turns ===

    /// Play the player's turn with one line of input
    ///
    /// Input other than "1" to "4" skips the turn and is flagged in the report.
    pub fn player_turn(&mut self, choice: &str) -> Result<TurnReport, CombatError> {
        self.take_player_action(PlayerAction::from_choice(choice))
    }

    /// Play the player's turn with an already parsed choice (`None` = invalid)
    pub fn take_player_action(&mut self, action: Option<PlayerAction>) -> Result<TurnReport, CombatError> {
        self.expect_phase(CombatPhase::PlayerTurn)?;
        let effects = self.begin_turn(Side::Player);
        Ok(self.finish_player_turn(effects, action))
    }

    /// Play the enemy's turn
    pub fn enemy_turn(&mut self) -> Result<TurnReport, CombatError> {
        self.expect_phase(CombatPhase::EnemyTurn)?;
        let effects = self.begin_turn(Side::Enemy);

        if !self.enemy.is_alive() {
            self.phase = CombatPhase::Resolved;
            return Ok(self.report(Side::Enemy, effects, None, false));
        }

        let action = if effects.stunned {
            info!("{} is stunned and cannot act this turn", self.enemy.name);
            CombatAction::Stunned
        } else {
            match EnemyAction::random(&mut self.rng) {
                EnemyAction::Attack => {
                    info!("{} attacks!", self.enemy.name);
                    self.attack(Side::Enemy)
                }
                EnemyAction::Burn => self.apply_effect(Side::Player, EffectKind::Burning),
                EnemyAction::Regenerate => self.apply_effect(Side::Enemy, EffectKind::Regeneration),
            }
        };

        self.phase = if self.player.is_alive() {
            CombatPhase::PlayerTurn
        } else {
            CombatPhase::Resolved
        };
        Ok(self.report(Side::Enemy, effects, Some(action), false))
    }

    /// Count the turn and run the actor's status effects
    fn begin_turn(&mut self, side: Side) -> EffectTickResult {
        self.turn += 1;
        let actor = self.combatant_mut(side);
        info!("{}'s turn", actor.name);
        actor.process_status_effects()
    }

    fn finish_player_turn(&mut self, effects: EffectTickResult, action: Option<PlayerAction>) -> TurnReport {
        if !self.player.is_alive() {
            self.phase = CombatPhase::Resolved;
            return self.report(Side::Player, effects, None, false);
        }

        let mut invalid_choice = false;
        let taken = if effects.stunned {
            info!("{} is stunned and cannot act this turn", self.player.name);
            CombatAction::Stunned
        } else {
            match action {
                Some(PlayerAction::Attack) => self.attack(Side::Player),
                Some(PlayerAction::Poison) => self.apply_effect(Side::Enemy, EffectKind::Poison),
                Some(PlayerAction::Regenerate) => self.apply_effect(Side::Player, EffectKind::Regeneration),
                Some(PlayerAction::Skip) => {
                    info!("{} skips the turn", self.player.name);
                    CombatAction::Skip
                }
                None => {
                    warn!("Invalid choice! Turn skipped.");
                    invalid_choice = true;
                    CombatAction::Skip
                }
            }
        };

        self.phase = if self.enemy.is_alive() {
            CombatPhase::EnemyTurn
        } else {
            CombatPhase::Resolved
        };
        self.report(Side::Player, effects, Some(taken), invalid_choice)
    }

    fn attack(&mut self, attacker: Side) -> CombatAction {
        let power = self.combatant(attacker).attack_power;
        let damage = self.combatant_mut(attacker.opponent()).apply_damage(power);
        CombatAction::Attack { damage }
    }

    fn apply_effect(&mut self, target: Side, kind: EffectKind) -> CombatAction {
        match self.registry.instantiate(kind) {
            Some(effect) => self.combatant_mut(target).add_effect(effect),
            None => warn!("No template registered for {}", kind),
        }
        CombatAction::ApplyEffect { target, kind }
    }

    fn report(
        &self,
        actor: Side,
        effects: EffectTickResult,
        action: Option<CombatAction>,
        invalid_choice: bool,
    ) -> TurnReport {
        TurnReport {
            turn: self.turn,
            actor,
            actor_name: self.combatant(actor).name.clone(),
            effects,
            action,
            invalid_choice,
            player_health: self.player.health(),
            enemy_health: self.enemy.health(),
            next_phase: self.phase,
        }
    }

    // === Loops ===

    /// Run the battle to the end, reading one line of input per player turn
    pub fn run<B: BufRead>(
        &mut self,
        input: &mut B,
        observer: &mut impl BattleObserver,
    ) -> Result<CombatOutcome, CombatError> {
        info!("Battle begins!");
        loop {
            match self.phase {
                CombatPhase::PlayerTurn => {
                    let effects = self.begin_turn(Side::Player);
                    let action = if self.player.is_alive() && !effects.stunned {
                        observer.on_prompt(&self.player, &self.enemy);
                        let mut line = String::new();
                        if input.read_line(&mut line)? == 0 {
                            return Err(CombatError::InputClosed);
                        }
                        PlayerAction::from_choice(&line)
                    } else {
                        None
                    };
                    let report = self.finish_player_turn(effects, action);
                    observer.on_turn(&report);
                }
                CombatPhase::EnemyTurn => {
                    let report = self.enemy_turn()?;
                    observer.on_turn(&report);
                }
                CombatPhase::Resolved => break,
            }
        }

        let outcome = self.finish();
        info!("{} wins the battle!", outcome.winner_name);
        Ok(outcome)
    }

    /// Run the battle to the end with `strategy` choosing the player's moves
    pub fn run_auto(
        &mut self,
        mut strategy: impl FnMut(&Combatant, &Combatant) -> PlayerAction,
        observer: &mut impl BattleObserver,
    ) -> Result<CombatOutcome, CombatError> {
        info!("Battle begins!");
        loop {
            let report = match self.phase {
                CombatPhase::PlayerTurn => {
                    let action = strategy(&self.player, &self.enemy);
                    self.take_player_action(Some(action))?
                }
                CombatPhase::EnemyTurn => self.enemy_turn()?,
                CombatPhase::Resolved => break,
            };
            observer.on_turn(&report);
        }

        let outcome = self.finish();
        info!("{} wins the battle!", outcome.winner_name);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    /// Always rolls the first enemy action (attack)
    fn attacking_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    fn battle() -> CombatSystem<StepRng> {
        CombatSystem::new(
            Combatant::new("Player", 100, 15, 5),
            Combatant::new("Enemy", 80, 12, 4),
            attacking_rng(),
        )
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(PlayerAction::from_choice("1\n"), Some(PlayerAction::Attack));
        assert_eq!(PlayerAction::from_choice(" 4 "), Some(PlayerAction::Skip));
        assert_eq!(PlayerAction::from_choice("5"), None);
        assert_eq!(PlayerAction::from_choice("attack"), None);
        assert_eq!(PlayerAction::menu().len(), 4);
    }

    #[test]
    fn test_turns_alternate() {
        let mut combat = battle();
        assert_eq!(combat.phase(), CombatPhase::PlayerTurn);

        let report = combat.player_turn("1").unwrap();
        assert_eq!(report.action, Some(CombatAction::Attack { damage: 11 }));
        assert_eq!(combat.enemy().health(), 69);
        assert_eq!(combat.phase(), CombatPhase::EnemyTurn);

        let report = combat.enemy_turn().unwrap();
        assert_eq!(report.action, Some(CombatAction::Attack { damage: 7 }));
        assert_eq!(combat.player().health(), 93);
        assert_eq!(combat.phase(), CombatPhase::PlayerTurn);
        assert_eq!(combat.turn(), 2);
    }

    #[test]
    fn test_out_of_turn_rejected() {
        let mut combat = battle();
        assert!(matches!(
            combat.enemy_turn(),
            Err(CombatError::OutOfTurn {
                expected: CombatPhase::EnemyTurn,
                actual: CombatPhase::PlayerTurn
            })
        ));
    }

    #[test]
    fn test_invalid_choice_skips() {
        let mut combat = battle();
        let report = combat.player_turn("banana").unwrap();
        assert!(report.invalid_choice);
        assert_eq!(report.action, Some(CombatAction::Skip));
        assert_eq!(combat.enemy().health(), 80);
        assert_eq!(combat.phase(), CombatPhase::EnemyTurn);
    }

    #[test]
    fn test_poison_ticks_on_enemy_turn() {
        let mut combat = battle();
        combat.player_turn("2").unwrap();
        assert!(combat.enemy().has_effect(EffectKind::Poison));

        let report = combat.enemy_turn().unwrap();
        // Poison 5 minus defense 4
        assert_eq!(report.effects.damage_taken, 1);
        assert_eq!(combat.enemy().health(), 79);
    }

    #[test]
    fn test_regeneration_on_self() {
        let mut combat = battle();
        combat.player_turn("3").unwrap();
        assert!(combat.player().has_effect(EffectKind::Regeneration));
        assert!(!combat.enemy().has_effect(EffectKind::Regeneration));
    }

    #[test]
    fn test_death_from_effects_skips_action() {
        let mut combat = CombatSystem::new(
            Combatant::new("Player", 100, 15, 0),
            Combatant::new("Slime", 3, 12, 0),
            attacking_rng(),
        );
        combat.player_turn("2").unwrap();

        let report = combat.enemy_turn().unwrap();
        assert_eq!(report.action, None);
        assert!(combat.is_resolved());
        assert_eq!(combat.winner(), Some(Side::Player));
        assert_eq!(combat.player().health(), 100);
    }

    #[test]
    fn test_stun_loses_action() {
        let mut combat = battle();
        let stun = EffectRegistry::with_defaults().instantiate(EffectKind::Stun).unwrap();
        combat.player.add_effect(stun);

        let report = combat.player_turn("1").unwrap();
        assert_eq!(report.action, Some(CombatAction::Stunned));
        assert_eq!(combat.enemy().health(), 80);
    }

    #[test]
    fn test_missing_template_is_harmless() {
        let mut combat = battle().with_registry(EffectRegistry::new());
        let report = combat.player_turn("2").unwrap();
        assert_eq!(
            report.action,
            Some(CombatAction::ApplyEffect { target: Side::Enemy, kind: EffectKind::Poison })
        );
        assert!(combat.enemy().active_effects().is_empty());
    }

    #[test]
    fn test_run_with_scripted_input() {
        let mut combat = battle();
        // Player deals 11 per hit: 80 health needs 8 hits
        let mut input = Cursor::new("1\n".repeat(8));
        let outcome = combat.run(&mut input, &mut ()).unwrap();

        assert_eq!(outcome.winner, Side::Player);
        assert_eq!(outcome.winner_name, "Player");
        assert_eq!(outcome.turns, 15);
        assert_eq!(combat.enemy().health(), 0);
        assert_eq!(combat.player().health(), 100 - 7 * 7);
    }

    #[test]
    fn test_run_input_closed() {
        let mut combat = battle();
        let mut input = Cursor::new("1\n");
        assert!(matches!(
            combat.run(&mut input, &mut ()),
            Err(CombatError::InputClosed)
        ));
    }

    struct Recorder {
        prompts: usize,
        reports: Vec<TurnReport>,
    }

    impl BattleObserver for Recorder {
        fn on_prompt(&mut self, _player: &Combatant, _enemy: &Combatant) {
            self.prompts += 1;
        }

        fn on_turn(&mut self, report: &TurnReport) {
            self.reports.push(report.clone());
        }
    }

    #[test]
    fn test_run_auto_terminates() {
        let mut combat = CombatSystem::new(
            Combatant::new("Player", 100, 15, 5),
            Combatant::new("Enemy", 80, 12, 4),
            StdRng::seed_from_u64(7),
        );
        let mut recorder = Recorder {
            prompts: 0,
            reports: Vec::new(),
        };

        let outcome = combat
            .run_auto(|_, _| PlayerAction::Attack, &mut recorder)
            .unwrap();

        assert!(combat.is_resolved());
        assert_eq!(recorder.prompts, 0);
        assert_eq!(recorder.reports.len() as u32, outcome.turns);
        let loser = combat.combatant(outcome.winner.opponent());
        assert!(!loser.is_alive());
        assert!(combat.combatant(outcome.winner).is_alive());
    }

    #[test]
    fn test_dead_on_arrival_is_resolved() {
        let combat = CombatSystem::new(
            Combatant::new("Player", 100, 15, 5),
            Combatant::new("Ghost", 0, 1, 0),
            attacking_rng(),
        );
        assert!(combat.is_resolved());
        assert_eq!(combat.winner(), Some(Side::Player));
    }
}
