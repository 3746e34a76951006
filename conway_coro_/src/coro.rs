// coro.rs - Next generation computed by one tokio task per row

use std::sync::Arc;

use anyhow::Context;
use conway::{Cell, Engine, Grid};

/// Row coroutine: evaluates every cell of `row_index`, yielding between
/// cells so the other rows get time slices.
async fn process_row(engine: Engine, current_grid: Arc<Grid>, row_index: usize) -> (usize, Vec<Cell>) {
    let mut row_result = Vec::with_capacity(current_grid.cols());
    for col in 0..current_grid.cols() {
        row_result.push(engine.next_cell(&current_grid, row_index, col));

        tokio::task::yield_now().await;
    }
    (row_index, row_result)
}

/// Spawns all row coroutines at once and reassembles their rows.
///
/// Tasks only read the shared prior grid and each owns the row it
/// returns, so no locking is involved.
pub async fn step_rows(engine: &Engine, grid: &Grid) -> anyhow::Result<Grid> {
    let (rows, cols) = grid.dimensions();
    let shared = Arc::new(grid.clone());

    let handles: Vec<_> = (0..rows)
        .map(|row| tokio::spawn(process_row(*engine, Arc::clone(&shared), row)))
        .collect();

    let mut next_rows = vec![Vec::new(); rows];
    for handle in handles {
        let (row_index, completed_row) = handle.await.context("row coroutine failed")?;
        next_rows[row_index] = completed_row;
    }

    Ok(Grid::new(rows, cols, next_rows)?)
}
