use gorillas::game::*;
use gorillas::geometry::Rect;
use gorillas::shot::{BananaSizes, ShotOutcome};

const GORILLA: (i32, i32) = (21, 19);

fn bananas() -> BananaSizes {
    BananaSizes { up: (7, 4), down: (7, 4), left: (4, 7), right: (4, 7) }
}

// ── Players ──────────────────────────────────────────────────────────────────

#[test]
fn player_numbers() {
    assert_eq!(Player::from_number(1), Some(Player::One));
    assert_eq!(Player::from_number(2), Some(Player::Two));
    assert_eq!(Player::from_number(0), None);
    assert_eq!(Player::One.other(), Player::Two);
    assert_eq!(Player::Two.index(), 1);
}

// ── Scoring ──────────────────────────────────────────────────────────────────

#[test]
fn hitting_the_opponent_scores() {
    let mut m = MatchState::new(3, Player::One);
    let r = m.resolve(ShotOutcome::HitGorilla(Player::Two));
    assert_eq!(r, Resolution::RoundOver { scorer: Player::One });
    assert_eq!(m.scores(), [1, 0]);
    assert_eq!(m.turn(), Player::One);
}

#[test]
fn self_hit_scores_for_the_opponent() {
    let mut m = MatchState::new(3, Player::One);
    let r = m.resolve(ShotOutcome::HitGorilla(Player::One));
    assert_eq!(r, Resolution::RoundOver { scorer: Player::Two });
    assert_eq!(m.scores(), [0, 1]);
}

#[test]
fn misses_pass_the_turn_without_scoring() {
    let mut m = MatchState::new(3, Player::One);
    assert_eq!(m.resolve(ShotOutcome::Miss), Resolution::NextTurn);
    assert_eq!(m.turn(), Player::Two);
    assert_eq!(m.resolve(ShotOutcome::HitBuilding), Resolution::NextTurn);
    assert_eq!(m.turn(), Player::One);
    assert_eq!(m.scores(), [0, 0]);
}

#[test]
fn new_round_opens_with_the_starting_player() {
    let mut m = MatchState::new(5, Player::Two);
    assert_eq!(m.turn(), Player::Two);
    m.resolve(ShotOutcome::Miss);
    assert_eq!(m.turn(), Player::One);
    // Player 1 scores on their turn; player 2 still opens the next round.
    m.resolve(ShotOutcome::HitGorilla(Player::Two));
    assert_eq!(m.turn(), Player::Two);
}

#[test]
fn reaching_the_target_ends_the_match() {
    let mut m = MatchState::new(2, Player::One);
    m.resolve(ShotOutcome::HitGorilla(Player::One));
    assert!(!m.is_over());
    let r = m.resolve(ShotOutcome::HitGorilla(Player::One));
    assert_eq!(r, Resolution::MatchOver { winner: Player::Two });
    assert!(m.is_over());
    assert_eq!(m.winner(), Some(Player::Two));
}

#[test]
fn target_of_zero_is_raised_to_one() {
    let m = MatchState::new(0, Player::One);
    assert_eq!(m.target(), 1);
    assert!(!m.is_over());
}

// ── Rounds ───────────────────────────────────────────────────────────────────

#[test]
fn wind_is_between_five_and_fifteen_either_way() {
    let mut rng = fastrand::Rng::with_seed(9);
    let winds: Vec<i32> = (0..500).map(|_| random_wind(&mut rng)).collect();
    assert!(winds.iter().all(|w| (5..=15).contains(&w.abs())));
    assert!(winds.iter().any(|&w| w < 0));
    assert!(winds.iter().any(|&w| w > 0));
}

#[test]
fn generated_round_puts_gorillas_on_roofs() {
    for seed in 0..20 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let sun = Rect::new(400, 24, 21, 13);
        let round = Round::generate(800, 480, GORILLA, bananas(), sun, &mut rng).unwrap();
        let one = round.gorilla(Player::One);
        let two = round.gorilla(Player::Two);
        assert!(one.x < two.x, "seed {seed}");
        for g in [one, two] {
            let feet = Rect::new(g.x, g.y + GORILLA.1 + 1, GORILLA.0, 1);
            assert!(round.skyline.is_occupied(feet), "seed {seed}: gorilla at {g} is floating");
            let body = Rect::new(g.x, g.y, GORILLA.0, GORILLA.1);
            assert!(!round.skyline.is_occupied(body), "seed {seed}: gorilla at {g} is buried");
        }
        assert_eq!(round.playfield.gorillas[0], Rect::new(one.x, one.y, 21, 19));
        assert_eq!(round.playfield.width, 800);
    }
}
