use super::roller::Roller;
use super::types::{PlayerName, RollEvent, Winner};

/// One completed roll evaluation. Carries everything the request handler
/// needs afterwards: the response body, the logbook line and the
/// leaderboard contributions.
#[derive(Debug, Clone, PartialEq)]
pub enum RollOutcome {
    Single {
        player: PlayerName,
        roll: u8,
        event: Option<RollEvent>,
    },
    BestOfThree {
        player: PlayerName,
        rolls: [u8; 3],
        best: u8,
    },
    Battle {
        player: PlayerName,
        opponent: PlayerName,
        player_roll: u8,
        opponent_roll: u8,
        winner: Winner,
    },
}

pub fn play_single(player: PlayerName, roller: &mut impl Roller) -> RollOutcome {
    let roll = roller.roll();
    let event = match roll {
        6 => Some(RollEvent::Jackpot),
        1 => Some(RollEvent::CriticalFail),
        _ => None,
    };

    RollOutcome::Single { player, roll, event }
}

pub fn play_best_of_three(player: PlayerName, roller: &mut impl Roller) -> RollOutcome {
    let rolls = [roller.roll(), roller.roll(), roller.roll()];
    let best = rolls[0].max(rolls[1]).max(rolls[2]);

    RollOutcome::BestOfThree { player, rolls, best }
}

pub fn play_battle(player: PlayerName, opponent: PlayerName, roller: &mut impl Roller) -> RollOutcome {
    let player_roll = roller.roll();
    let opponent_roll = roller.roll();
    let winner = determine_winner(player_roll, opponent_roll);

    RollOutcome::Battle {
        player,
        opponent,
        player_roll,
        opponent_roll,
        winner,
    }
}

fn determine_winner(player_roll: u8, opponent_roll: u8) -> Winner {
    if player_roll > opponent_roll {
        Winner::Player
    } else if opponent_roll > player_roll {
        Winner::Opponent
    } else {
        Winner::Tie
    }
}

fn winner_label<'a>(player: &'a PlayerName, opponent: &'a PlayerName, winner: Winner) -> &'a str {
    match winner {
        Winner::Player => player.as_str(),
        Winner::Opponent => opponent.as_str(),
        Winner::Tie => "It's a tie!",
    }
}

impl RollOutcome {
    /// Exact plain-text response body for this outcome.
    pub fn response_text(&self) -> String {
        match self {
            Self::Single { player, roll, event } => {
                let base = format!("Hi {player}, your dice roll is: {roll}\n");
                match event {
                    Some(event) => format!("{base}{}\n", event.describe(player)),
                    None => base,
                }
            }
            Self::BestOfThree { player, rolls, best } => format!(
                "{player} played Best of Three: Rolls {},{},{}, Best {best} 🎲\n",
                rolls[0], rolls[1], rolls[2]
            ),
            Self::Battle {
                player,
                opponent,
                winner,
                ..
            } => {
                format!(
                    "{player} vs {opponent}: {} wins 🎲\n",
                    winner_label(player, opponent, *winner)
                )
            }
        }
    }

    /// One-line description appended to the logbook.
    pub fn log_line(&self) -> String {
        match self {
            Self::Single { player, roll, event } => match event {
                Some(event) => format!("{player} rolled a {roll} 🎲 {}", event.describe(player)),
                None => format!("{player} rolled a {roll} 🎲"),
            },
            Self::BestOfThree { player, rolls, best } => format!(
                "{player} played Best of Three: Rolls {},{},{}, Best {best} 🎲",
                rolls[0], rolls[1], rolls[2]
            ),
            Self::Battle {
                player,
                opponent,
                winner,
                ..
            } => {
                format!(
                    "{player} vs {opponent}: {} wins 🎲",
                    winner_label(player, opponent, *winner)
                )
            }
        }
    }

    /// Leaderboard contributions: every participant paired with the roll
    /// that counts for them. Best-of-three counts once, at its best value.
    pub fn scores(&self) -> Vec<(&PlayerName, u8)> {
        match self {
            Self::Single { player, roll, .. } => vec![(player, *roll)],
            Self::BestOfThree { player, best, .. } => vec![(player, *best)],
            Self::Battle {
                player,
                opponent,
                player_roll,
                opponent_roll,
                ..
            } => vec![(player, *player_roll), (opponent, *opponent_roll)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRoller {
        values: Vec<u8>,
        next: usize,
    }

    impl MockRoller {
        fn new(values: &[u8]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl Roller for MockRoller {
        fn roll(&mut self) -> u8 {
            let value = self.values[self.next];
            self.next += 1;
            value
        }
    }

    fn alice() -> PlayerName {
        PlayerName::resolve(Some("Alice".to_string()))
    }

    fn bob() -> PlayerName {
        PlayerName::resolve(Some("Bob".to_string()))
    }

    #[test]
    fn test_single_roll_without_event() {
        let outcome = play_single(alice(), &mut MockRoller::new(&[4]));

        assert_eq!(
            outcome,
            RollOutcome::Single {
                player: alice(),
                roll: 4,
                event: None,
            }
        );
        assert_eq!(outcome.response_text(), "Hi Alice, your dice roll is: 4\n");
        assert_eq!(outcome.log_line(), "Alice rolled a 4 🎲");
        assert_eq!(outcome.scores(), vec![(&alice(), 4)]);
    }

    #[test]
    fn test_single_roll_jackpot_on_six() {
        let outcome = play_single(alice(), &mut MockRoller::new(&[6]));

        assert_eq!(
            outcome.response_text(),
            "Hi Alice, your dice roll is: 6\nAlice hit the jackpot! 🎉\n"
        );
        assert_eq!(outcome.log_line(), "Alice rolled a 6 🎲 Alice hit the jackpot! 🎉");
    }

    #[test]
    fn test_single_roll_critical_fail_on_one() {
        let outcome = play_single(alice(), &mut MockRoller::new(&[1]));

        assert_eq!(
            outcome.response_text(),
            "Hi Alice, your dice roll is: 1\nAlice rolled a critical fail! 😢\n"
        );
    }

    #[test]
    fn test_best_of_three_reports_the_maximum() {
        let outcome = play_best_of_three(alice(), &mut MockRoller::new(&[3, 5, 2]));

        assert_eq!(
            outcome,
            RollOutcome::BestOfThree {
                player: alice(),
                rolls: [3, 5, 2],
                best: 5,
            }
        );
        assert_eq!(
            outcome.response_text(),
            "Alice played Best of Three: Rolls 3,5,2, Best 5 🎲\n"
        );
        assert_eq!(outcome.scores(), vec![(&alice(), 5)]);
    }

    #[test]
    fn test_battle_higher_roll_wins() {
        let outcome = play_battle(alice(), bob(), &mut MockRoller::new(&[5, 2]));

        assert_eq!(outcome.response_text(), "Alice vs Bob: Alice wins 🎲\n");
        assert_eq!(outcome.scores(), vec![(&alice(), 5), (&bob(), 2)]);

        let outcome = play_battle(alice(), bob(), &mut MockRoller::new(&[2, 5]));
        assert_eq!(outcome.response_text(), "Alice vs Bob: Bob wins 🎲\n");
    }

    #[test]
    fn test_battle_equal_rolls_tie() {
        let outcome = play_battle(alice(), bob(), &mut MockRoller::new(&[3, 3]));

        match &outcome {
            RollOutcome::Battle { winner, .. } => assert_eq!(*winner, Winner::Tie),
            other => panic!("expected a battle outcome, got {:?}", other),
        }
        assert_eq!(outcome.response_text(), "Alice vs Bob: It's a tie! wins 🎲\n");
    }
}
