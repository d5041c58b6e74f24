//! Generation throughput of `Grid::step` at several grid sizes

use std::time::Instant;

use conway_life::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DENSITY: f64 = 0.3;

/// Seed roughly 30% of the cells alive
fn random_grid(cols: usize, rows: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(cols as u32 * 4, rows as u32 * 4, cols, rows);
    for col in 0..cols {
        for row in 0..rows {
            if !rng.random_bool(DENSITY) {
                continue;
            }
            if let Some(cell) = grid.cell_mut(col, row) {
                cell.spawn();
            }
        }
    }
    grid.commit();
    grid
}

fn benchmark_step(cols: usize, rows: usize, iterations: u32, rng: &mut StdRng) -> (f64, usize) {
    let mut grid = random_grid(cols, rows, rng);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, grid.alive_count())
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [(60, 40), (100, 100), (250, 250), (500, 500), (1000, 1000)];
    let iterations = 20;
    let mut rng = StdRng::seed_from_u64(42);

    println!("{:>12} {:>12} {:>16} {:>10}", "Size", "ms/gen", "M cells/sec", "Alive");
    println!("{:-<54}", "");

    for (cols, rows) in sizes {
        let (ms, alive) = benchmark_step(cols, rows, iterations, &mut rng);
        let cells = (cols * rows) as f64;
        println!(
            "{:>12} {:>12.3} {:>16.1} {:>10}",
            format!("{}x{}", cols, rows),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0,
            alive
        );
    }
}
