//! Performance benchmark comparing serial and parallel grid evolution

use std::time::Instant;

use life_sim::domain::{Grid, PARALLEL_THRESHOLD};
use rand::{SeedableRng, rngs::StdRng};

const MARGIN: usize = 10;

fn seeded_grid(size: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::new(size, size, MARGIN);
    grid.randomize(&mut rng, 0.3);
    grid
}

/// Average milliseconds per generation
fn benchmark(size: usize, iterations: u32, step: fn(&mut Grid)) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        step(&mut grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations)
}

fn main() {
    println!("=== Game of Life Evolution Benchmark ===\n");
    println!("Parallel threshold: {PARALLEL_THRESHOLD} cells (margin {MARGIN})\n");

    let sizes = [50, 100, 200, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, Grid::advance_serial);
        let parallel_ms = benchmark(size, iterations, Grid::advance_parallel);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
