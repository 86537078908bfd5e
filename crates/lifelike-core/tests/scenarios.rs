//! End-to-end scenarios across boards, rules, and the simulator.

use lifelike_core::{
    Board, BoardError, NeighborPosition, Neighborhood, Preset, RuleError, RuleTable, Simulator,
};

const F: bool = false;
const T: bool = true;

#[test]
fn vertical_edge_line_becomes_horizontal_pair() {
    let board = Board::from_rows(&[[F, F, T], [F, F, T], [F, F, T]]).unwrap();
    let rule = RuleTable::new("B3S23").unwrap();
    let next = Simulator::new(rule).run(&board, 1);
    assert_eq!(next.to_rows(), vec![vec![F, F, F], vec![F, T, T], vec![F, F, F]]);
}

#[test]
fn malformed_rules_are_rejected() {
    assert_eq!("".parse::<RuleTable>(), Err(RuleError::Empty));
    assert!(matches!(
        "B23/S23".parse::<RuleTable>(),
        Err(RuleError::InvalidCharacter { found: '/', .. })
    ));
    assert!(matches!(
        "23".parse::<RuleTable>(),
        Err(RuleError::DigitBeforeMode { position: 0, .. })
    ));
}

#[test]
fn birth_and_survival_on_three() {
    let rule = RuleTable::default();
    let dead_center = Neighborhood::from_grid(&[[T, F, F], [F, F, T], [F, T, F]]).unwrap();
    assert!(!dead_center.center());
    assert_eq!(dead_center.live_neighbors(), 3);
    assert!(rule.evaluate(dead_center));

    let live_center = dead_center.with_cell(NeighborPosition::Center, true);
    assert!(rule.evaluate(live_center));
}

#[test]
fn fallback_reads_off_the_board() {
    let board = Board::from_size(4, 4, false).unwrap();
    assert!(matches!(
        board.get(-1, 0),
        Err(BoardError::RowOutOfRange { row: -1, .. })
    ));
    assert!(board.get_or(-1, 0, true));
}

#[test]
fn boards_without_rows_are_rejected() {
    let rows: Vec<Vec<bool>> = vec![];
    assert_eq!(Board::try_from(rows), Err(BoardError::NoRows));
    assert_eq!("\n\n".parse::<Board>().map(|_| ()), Err(BoardError::NoRows.into()));
}

#[test]
fn replicator_spreads_a_single_cell() {
    let mut board = Board::from_size(9, 9, false).unwrap();
    board.set(4, 4, true).unwrap();
    let simulator = Simulator::new(Preset::Replicator.into());

    // Under B1357S1357 the next state is the parity of the eight neighbors,
    // so a single cell becomes its ring of neighbors, and after four
    // generations the same ring reappears with a spacing of four.
    let one = simulator.step(&board);
    assert_eq!(one.live_count(), 8);
    assert_eq!(one.get(4, 4), Ok(false));

    let four = simulator.run(&board, 4);
    let live: Vec<(isize, isize)> = (0..9)
        .flat_map(|r| (0..9).map(move |c| (r, c)))
        .filter(|&(r, c)| four.get(r, c).unwrap())
        .collect();
    assert_eq!(
        live,
        vec![
            (0, 0),
            (0, 4),
            (0, 8),
            (4, 0),
            (4, 8),
            (8, 0),
            (8, 4),
            (8, 8)
        ]
    );
}

#[test]
fn rule_tables_from_same_string_are_identical() {
    let a = RuleTable::new(Preset::Replicator.rule_string()).unwrap();
    let b = RuleTable::new("b1357s1357").unwrap();
    assert_eq!(a, b);
    assert!(Neighborhood::all().all(|n| a.evaluate(n) == b.evaluate(n)));
}
