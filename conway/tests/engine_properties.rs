use conway::{patterns, step, BoundaryPolicy, Cell, Engine, Error, Grid, Rule};
use proptest::prelude::*;

const RULES: [Rule; 5] = [
    Rule::CONWAY,
    Rule::B1_S12,
    Rule::Immigration,
    Rule::ImmigrationTakeover,
    Rule::Identity,
];
const POLICIES: [BoundaryPolicy; 2] = [BoundaryPolicy::Toroidal, BoundaryPolicy::Clipped];

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..9, 1usize..9).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0u8..3, cols), rows).prop_map(|values| {
            let rows: Vec<Vec<Cell>> = values
                .into_iter()
                .map(|row| row.into_iter().map(|v| Cell::try_from(v).unwrap()).collect())
                .collect();
            Grid::from_rows(rows).unwrap()
        })
    })
}

fn shifted(cells: &[(usize, usize)], dr: usize, dc: usize, (rows, cols): (usize, usize)) -> Vec<(usize, usize)> {
    let mut out: Vec<_> = cells.iter().map(|&(r, c)| ((r + dr) % rows, (c + dc) % cols)).collect();
    out.sort();
    out
}

proptest! {
    #[test]
    fn step_preserves_dimensions(grid in arb_grid(), rule in 0usize..5, policy in 0usize..2) {
        let next = step(&grid, RULES[rule], POLICIES[policy]).unwrap();
        prop_assert_eq!(next.dimensions(), grid.dimensions());
    }

    #[test]
    fn identity_rule_is_a_fixed_point(grid in arb_grid(), policy in 0usize..2) {
        prop_assert_eq!(step(&grid, Rule::Identity, POLICIES[policy]).unwrap(), grid);
    }

    #[test]
    fn step_is_deterministic(grid in arb_grid(), rule in 0usize..5) {
        let engine = Engine::new(RULES[rule], BoundaryPolicy::Toroidal);
        prop_assert_eq!(engine.step(&grid).unwrap(), engine.step(&grid).unwrap());
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let start = patterns::blinker();
    let one = step(&start, Rule::CONWAY, BoundaryPolicy::Toroidal).unwrap();
    assert_eq!(one.live_cells(), vec![(2, 1), (2, 2), (2, 3)]);

    let two = step(&one, Rule::CONWAY, BoundaryPolicy::Toroidal).unwrap();
    assert_eq!(two, start);
}

#[test]
fn narrow_line_oscillator_also_has_period_two() {
    let engine = Engine::new(Rule::CONWAY, BoundaryPolicy::Toroidal);
    let start = patterns::line_oscillator();
    let one = engine.step(&start).unwrap();
    assert_eq!(one.live_cells(), vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(engine.run(&start, 2).unwrap(), start);
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    let engine = Engine::new(Rule::CONWAY, BoundaryPolicy::Toroidal);
    let start = patterns::basic_glider();
    let dims = start.dimensions();

    let four = engine.run(&start, 4).unwrap();
    assert_eq!(four.live_cells(), shifted(&start.live_cells(), 1, 1, dims));

    // Keeps going across the wrapped edges
    let twelve = engine.run(&four, 8).unwrap();
    assert_eq!(twelve.live_cells(), shifted(&start.live_cells(), 3, 3, dims));
}

#[test]
fn clipped_and_toroidal_diverge_on_two_by_two() {
    let grid = Grid::from_numeric(&[&[1, 1], &[1, 0]]).unwrap();

    // Clipped: every cell sees the other three once, so the L becomes a block
    let clipped = step(&grid, Rule::CONWAY, BoundaryPolicy::Clipped).unwrap();
    assert_eq!(clipped.population(), 4);

    // Toroidal: wrapped neighbors are counted repeatedly and everything dies
    let toroidal = step(&grid, Rule::CONWAY, BoundaryPolicy::Toroidal).unwrap();
    assert_eq!(toroidal.population(), 0);

    assert_ne!(clipped, toroidal);
}

#[test]
fn clipped_corner_is_not_fed_by_opposite_edge() {
    // Three cells on the right edge; a toroidal step revives the left column
    let mut grid = Grid::dead(5, 5).unwrap();
    for row in 1..4 {
        grid.set(row, 4, Cell::ALIVE);
    }
    let wrapped = step(&grid, Rule::CONWAY, BoundaryPolicy::Toroidal).unwrap();
    let clipped = step(&grid, Rule::CONWAY, BoundaryPolicy::Clipped).unwrap();
    assert_eq!(wrapped.get(2, 0), Cell::ALIVE);
    assert_eq!(clipped.get(2, 0), Cell::Dead);
    assert_eq!(clipped.live_cells(), vec![(2, 3), (2, 4)]);
}

#[test]
fn immigration_birth_goes_to_majority_faction() {
    let grid = Grid::from_numeric(&[
        &[0, 0, 0, 0, 0],
        &[0, 1, 1, 2, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
    ])
    .unwrap();
    let next = step(&grid, Rule::Immigration, BoundaryPolicy::Toroidal).unwrap();
    assert_eq!(next.get(2, 2), Cell::FactionA);
}

#[test]
fn immigration_survivor_keeps_its_faction() {
    let grid = Grid::from_numeric(&[
        &[0, 0, 0, 0, 0],
        &[0, 2, 0, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 0, 2, 0],
        &[0, 0, 0, 0, 0],
    ])
    .unwrap();
    let kept = step(&grid, Rule::Immigration, BoundaryPolicy::Toroidal).unwrap();
    assert_eq!(kept.get(2, 2), Cell::FactionA);

    let taken = step(&grid, Rule::ImmigrationTakeover, BoundaryPolicy::Toroidal).unwrap();
    assert_eq!(taken.get(2, 2), Cell::FactionB);
}

#[test]
fn ragged_rows_are_invalid_dimensions() {
    let err = Grid::new(2, 2, vec![vec![Cell::Dead, Cell::ALIVE], vec![Cell::Dead]]).unwrap_err();
    assert!(matches!(err, Error::InvalidDimensions { expected_cols: 2, actual_cols: 1, .. }));
}

#[test]
fn b1_s12_differs_from_conway() {
    let grid = patterns::single_cell(5, 5).unwrap();
    let conway = step(&grid, Rule::CONWAY, BoundaryPolicy::Toroidal).unwrap();
    let b1 = step(&grid, Rule::B1_S12, BoundaryPolicy::Toroidal).unwrap();
    assert_eq!(conway.population(), 0);
    // Every neighbor is born; the lone cell dies with zero neighbors
    assert_eq!(b1.population(), 8);
    assert_eq!(b1.get(2, 2), Cell::Dead);
}
