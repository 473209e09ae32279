//! Write a shuffled input file, then sort it back with a bitmap

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::Write;
use std::time::Instant;
use vsort::{create_sink, open_lines, BitmapSort, SortConfig, DEFAULT_CAPACITY};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let count = 1_000_000;
    let config = SortConfig::with_capacity(DEFAULT_CAPACITY);

    println!(
        "Sorting {count} distinct values below {} ({} bytes of bitmap)",
        config.capacity(),
        config.bitmap_bytes()
    );

    // Distinct values spread over the universe, shuffled
    let start = Instant::now();
    let stride = config.capacity() / count;
    let mut values: Vec<usize> = (0..count).map(|i| i * stride).collect();
    values.shuffle(&mut StdRng::seed_from_u64(1));

    let mut input = create_sink("demo_input.txt")?;
    for v in &values {
        writeln!(input, "{v}")?;
    }
    input.flush()?;
    drop(input);
    println!("Wrote demo_input.txt in {:?}", start.elapsed());

    let mut sort = BitmapSort::new(config);
    let report = sort.run(open_lines("demo_input.txt")?, create_sink("demo_output.txt")?)?;
    println!("{report}");
    println!("Sorted output is in demo_output.txt");
    Ok(())
}
