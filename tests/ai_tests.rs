use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    AiPlayer, Board, Coordinate, Orientation, Player, PlayerKind, Ship, ShotError, ShotOutcome,
};

fn c(row: isize, col: isize) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_random_search_stays_on_board() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut ai = AiPlayer::new();
    assert_eq!(ai.kind(), PlayerKind::Automated);
    for _ in 0..500 {
        let target = ai.next_target(&mut rng, 6).unwrap();
        assert!((0..6).contains(&target.row));
        assert!((0..6).contains(&target.col));
    }
    assert!(!ai.is_hunting());
}

#[test]
fn test_hunt_proposes_only_neighbors_of_hit() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut ai = AiPlayer::new();
    ai.on_outcome(c(3, 3), ShotOutcome::Wounded { remaining: 2 });
    assert!(ai.is_hunting());

    let neighbors = [c(2, 3), c(4, 3), c(3, 2), c(3, 4)];
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..200 {
        let target = ai.next_target(&mut rng, 6).unwrap();
        assert!(neighbors.contains(&target), "{:?} is not next to (3,3)", target);
        seen.insert(target);
    }
    assert_eq!(seen.len(), 4, "all four neighbours should come up");
}

#[test]
fn test_missed_probe_keeps_anchor() {
    let mut rng = SmallRng::seed_from_u64(12);
    let mut ai = AiPlayer::new();
    ai.on_outcome(c(3, 3), ShotOutcome::Wounded { remaining: 1 });

    let neighbors = [c(2, 3), c(4, 3), c(3, 2), c(3, 4)];
    let mut missed = Vec::new();
    for _ in 0..3 {
        let target = ai.next_target(&mut rng, 6).unwrap();
        assert!(neighbors.contains(&target));
        assert!(!missed.contains(&target), "probe {:?} repeated", target);
        ai.on_outcome(target, ShotOutcome::Missed);
        missed.push(target);
        assert_eq!(ai.hunt_anchor(), Some(c(3, 3)));
    }

    let last = ai.next_target(&mut rng, 6).unwrap();
    assert!(neighbors.contains(&last) && !missed.contains(&last));
}

#[test]
fn test_rejected_neighbor_not_proposed_again() {
    let mut rng = SmallRng::seed_from_u64(13);
    let mut ai = AiPlayer::new();
    ai.on_outcome(c(0, 0), ShotOutcome::Wounded { remaining: 1 });
    ai.on_rejected(c(-1, 0), &ShotError::OutOfRange(c(-1, 0)));
    ai.on_rejected(c(0, -1), &ShotError::OutOfRange(c(0, -1)));

    for _ in 0..50 {
        let target = ai.next_target(&mut rng, 6).unwrap();
        assert!(target == c(1, 0) || target == c(0, 1), "{:?}", target);
    }
}

#[test]
fn test_destroyed_ends_hunt() {
    let mut ai = AiPlayer::new();
    ai.on_outcome(c(3, 3), ShotOutcome::Wounded { remaining: 1 });
    ai.on_outcome(c(3, 4), ShotOutcome::Destroyed);
    assert!(!ai.is_hunting());
    assert_eq!(ai.hunt_anchor(), None);
}

#[test]
fn test_new_hit_moves_anchor() {
    let mut ai = AiPlayer::new();
    ai.on_outcome(c(3, 3), ShotOutcome::Wounded { remaining: 2 });
    ai.on_outcome(c(3, 4), ShotOutcome::Wounded { remaining: 1 });
    assert_eq!(ai.hunt_anchor(), Some(c(3, 4)));
}

#[test]
fn test_exhausted_anchor_falls_back_to_earlier_hit() {
    // Length-3 ship at (2,1)-(2,3). The middle is hit first, then the left
    // end; every other neighbour of the left end misses. The far end is only
    // reachable from the middle hit.
    let mut board = Board::new(6);
    board
        .place(Ship::new(c(2, 1), 3, Orientation::Horizontal))
        .unwrap();
    board.begin();

    let mut ai = AiPlayer::new();
    let outcome = board.fire(c(2, 2)).unwrap();
    ai.on_outcome(c(2, 2), outcome);
    let outcome = board.fire(c(2, 1)).unwrap();
    ai.on_outcome(c(2, 1), outcome);
    for miss in [c(1, 1), c(3, 1), c(2, 0)] {
        assert_eq!(board.fire(miss).unwrap(), ShotOutcome::Missed);
        ai.on_outcome(miss, ShotOutcome::Missed);
    }

    let mut rng = SmallRng::seed_from_u64(21);
    let mut shots = 0;
    loop {
        shots += 1;
        assert!(shots < 20, "hunt did not finish the ship");
        let target = ai.next_target(&mut rng, 6).unwrap();
        assert!(
            c(2, 2).neighbors().contains(&target),
            "{:?} not next to the middle hit",
            target
        );
        match board.fire(target) {
            Ok(outcome) => {
                ai.on_outcome(target, outcome);
                if outcome == ShotOutcome::Destroyed {
                    break;
                }
            }
            Err(err) => ai.on_rejected(target, &err),
        }
    }
    assert!(board.is_defeated());
    assert!(!ai.is_hunting());
}

#[test]
fn test_fully_exhausted_hunt_returns_to_random() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut ai = AiPlayer::new();
    ai.on_outcome(c(0, 0), ShotOutcome::Wounded { remaining: 1 });
    for n in c(0, 0).neighbors() {
        ai.on_outcome(n, ShotOutcome::Missed);
    }
    let target = ai.next_target(&mut rng, 6).unwrap();
    assert!(!ai.is_hunting());
    assert!((0..6).contains(&target.row) && (0..6).contains(&target.col));
}

#[test]
fn test_empty_board_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut ai = AiPlayer::new();
    assert!(ai.next_target(&mut rng, 0).is_err());
}
