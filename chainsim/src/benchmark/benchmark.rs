use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::simulation::chain::{Chain, RandomDirections};
use crate::simulation::error::ChainResult;
use crate::simulation::vector::NVec2;

// Radii halve per link, so start huge to keep long chains above zero
const BENCH_RADIUS: f64 = 1.0e300;
const BENCH_SEED: u64 = 42;

/// Chain lengths used by both benchmarks
const LENGTHS: [usize; 8] = [8, 16, 32, 64, 128, 256, 512, 1024];

fn make_chain(n: usize) -> ChainResult<Chain> {
    let mut directions = RandomDirections::new(StdRng::seed_from_u64(BENCH_SEED));
    Chain::init(BENCH_RADIUS, NVec2::zeros(), n, 1.0, &mut directions)
}

/// Time `Chain::rotate` for growing chain lengths.
/// Propagation touches every downstream link, so expect quadratic growth
pub fn bench_rotate() -> ChainResult<()> {
    let frames = 600; // ten seconds of animation at 60 fps

    println!("N,rotate_us");
    for n in LENGTHS {
        let mut chain = make_chain(n)?;

        // Warm up
        chain.rotate(1.0);

        let t0 = Instant::now();
        for _ in 0..frames {
            chain.rotate(1.0);
        }
        let us_per_frame = t0.elapsed().as_secs_f64() * 1.0e6 / frames as f64;

        println!("{},{:.3}", n, us_per_frame);
    }

    Ok(())
}

/// Time the initial layout for growing chain lengths
pub fn bench_init() -> ChainResult<()> {
    let repeats = 100;

    println!("N,init_us");
    for n in LENGTHS {
        let t0 = Instant::now();
        for _ in 0..repeats {
            make_chain(n)?;
        }
        let us_per_init = t0.elapsed().as_secs_f64() * 1.0e6 / repeats as f64;

        println!("{},{:.3}", n, us_per_init);
    }

    Ok(())
}
