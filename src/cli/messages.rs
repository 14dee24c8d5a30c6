//! Flavor text.
//!
//! Purely decorative: the engine reports a narrative category and the
//! presenter picks a line for it here.

use furry_fists::GameRng;

const NO_DAMAGE: &[&str] = &[
    "The {attacker} charged in, tripped over its own tail, and hit nothing at all!",
    "The {attacker} swung wide and struck only empty air!",
    "A butterfly drifted past. The {attacker} watched it instead of attacking.",
    "The {attacker} wound up for a mighty blow, then sneezed. No damage!",
    "The {attacker} slipped on something unmentionable and missed completely!",
];

const HIT: &[&str] = &[
    "With a wet crunch, the {attacker} sank its teeth into the {target}!",
    "Fur flew as the {attacker} raked the {target} from nose to tail!",
    "The {attacker} landed a flurry of savage blows, and the {target} howled!",
    "Snarling, the {attacker} slammed the {target} into the dirt!",
    "The {attacker} went for the throat, and the {target} barely twisted free!",
    "Claws flashed. The {target} staggered back, bleeding from a dozen cuts!",
];

const VICTORY: &[&str] = &[
    "With one last bone-cracking blow, the {winner} left the {loser} twitching in the dust.",
    "The {winner} stood over the ruined {loser} and roared at the sky.",
    "A final shriek, and the {loser} was no more. The {winner} licked its paws.",
    "Dripping and triumphant, the {winner} kicked what was left of the {loser} aside.",
];

const DEFEAT: &[&str] = &[
    "The pitiless {winner} tore you apart. Your last squeal echoed in the arena.",
    "The {winner} cackled as the {loser} crumpled into a heap of fur and regret.",
    "Nothing remained of the {loser} but tufts of fur. The {winner} didn't even look back.",
    "A sickening snap, and the {winner} had finished the {loser} for good.",
];

/// Picks flavor lines from a dedicated RNG stream.
pub struct Flavor {
    rng: GameRng,
}

impl Flavor {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    pub fn no_damage(&mut self, attacker: &str) -> String {
        self.pick(NO_DAMAGE, &[("{attacker}", attacker)])
    }

    pub fn hit(&mut self, attacker: &str, target: &str) -> String {
        self.pick(HIT, &[("{attacker}", attacker), ("{target}", target)])
    }

    pub fn victory(&mut self, winner: &str, loser: &str) -> String {
        self.pick(VICTORY, &[("{winner}", winner), ("{loser}", loser)])
    }

    pub fn defeat(&mut self, winner: &str, loser: &str) -> String {
        self.pick(DEFEAT, &[("{winner}", winner), ("{loser}", loser)])
    }

    fn pick(&mut self, lines: &[&str], names: &[(&str, &str)]) -> String {
        let line = self.rng.choose(lines).copied().unwrap_or_default();
        names
            .iter()
            .fold(line.to_string(), |text, (key, name)| text.replace(key, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_substituted() {
        let mut flavor = Flavor::new(GameRng::new(3));

        for _ in 0..20 {
            let line = flavor.hit("wolf", "goat");
            assert!(!line.contains('{'), "unfilled placeholder in {line:?}");
            assert!(line.contains("wolf") || line.contains("goat"));
        }
    }

    #[test]
    fn test_every_table_fills_placeholders() {
        let mut flavor = Flavor::new(GameRng::new(9));

        for _ in 0..20 {
            assert!(!flavor.no_damage("rat").contains('{'));
            assert!(!flavor.victory("cat", "dog").contains('{'));
            assert!(!flavor.defeat("cat", "dog").contains('{'));
        }
    }
}
