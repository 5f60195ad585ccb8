use broadside::{AttackError, Board, BoardError, Cell, GuessResult, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> (Board, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::default();
    board.place_remaining_randomly(&mut rng).unwrap();
    (board, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let (board, _) = random_board(seed);
        let ships = board.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for &(ar, ac) in a.positions() {
                    for &(br, bc) in b.positions() {
                        prop_assert!(ar.abs_diff(br).max(ac.abs_diff(bc)) > 1);
                    }
                }
            }
        }
        let total: usize = board.fleet().iter().map(|t| t.length()).sum();
        prop_assert_eq!(board.occupied_cells(), total);
    }

    #[test]
    fn repeated_attack_fails_and_changes_nothing(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let (mut board, _) = random_board(seed);
        let first = board.attack(row, col).unwrap();
        let cell_after = board.cell(row, col).unwrap();
        prop_assert_eq!(cell_after, if first.is_hit() { Cell::Hit } else { Cell::Miss });

        let err = board.attack(row, col).unwrap_err();
        prop_assert_eq!(err, BoardError::InvalidAttack(AttackError::AlreadyAttacked { row, col }));
        prop_assert_eq!(board.cell(row, col).unwrap(), cell_after);
        prop_assert_eq!(board.shots(), 1);
    }

    #[test]
    fn all_sunk_exactly_when_every_segment_hit(seed in any::<u64>()) {
        let (mut board, mut rng) = random_board(seed);
        let mut cells: Vec<(usize, usize)> = (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .collect();
        // Fisher-Yates so each seed attacks in its own order.
        for i in (1..cells.len()).rev() {
            let j = rng.random_range(0..=i);
            cells.swap(i, j);
        }

        let mut sinks = 0;
        for (r, c) in cells {
            let result = board.attack(r, c).unwrap();
            if let GuessResult::Sink(name) = &result {
                sinks += 1;
                let ship = board.ship(name).unwrap();
                prop_assert!(ship.positions().iter().all(|p| ship.hits().contains(p)));
            }
            let every_hit = board
                .ships()
                .iter()
                .all(|s| s.hits().len() == s.positions().len());
            prop_assert_eq!(board.all_sunk(), every_hit);
        }
        prop_assert_eq!(sinks, board.fleet().len());
        prop_assert!(board.all_sunk());
    }
}
