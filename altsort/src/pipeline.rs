//! The whole read, generate, sort and print run.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use altsort::Pipeline;
//!
//! let pipeline = Pipeline::new().seed(42);
//!
//! let mut out = vec![];
//! let arrays = pipeline.run("oops\n3\n".as_bytes(), &mut out)?;
//!
//! assert_eq!(arrays.len(), 3);
//! assert!(String::from_utf8(out)?.starts_with("Please, enter a number of arrays:\n"));
//! # Ok(())
//! # }
//! ```

use std::io::{BufRead, Write};

use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;
use tracing::info;

use crate::collection::ArrayCollection;
use crate::config::{self, SizeStrategy};
use crate::errors::Result;
use crate::generator::generate_arrays;
use crate::input::read_natural_number;
use crate::sizes::generate_unique_sizes;
use crate::sorter::sort_alternating;

/// Prompt written before the count is read.
pub const PROMPT: &str = "Please, enter a number of arrays:";

/// Header written before the generated arrays.
pub const GENERATED_HEADER: &str = "Generated arrays:";

/// Header written before the sorted arrays.
pub const SORTED_HEADER: &str = "Sorted arrays:";

/// Configured run of the program.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    seed: Option<u64>,
    strategy: SizeStrategy,
}

impl Pipeline {
    /// Creates a pipeline seeded from system entropy and using [`SizeStrategy::Rejection`].
    pub const fn new() -> Self {
        Self {
            seed: None,
            strategy: SizeStrategy::Rejection,
        }
    }

    /// Seeds the random sources so that equal seeds produce equal runs.
    ///
    /// # Arguments
    ///
    ///  - `seed`: Seed of the size generator. The value generator is seeded from it.
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Specifies how distinct array sizes are drawn.
    pub const fn strategy(mut self, strategy: SizeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    fn size_rng(&self) -> Result<StdRng> {
        Ok(match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(OsRng)?,
        })
    }

    /// Runs the program: prompts on `wtr`, reads the number of arrays from `rdr`, generates the
    /// arrays, prints them, sorts them and prints them again.
    ///
    /// Returns the sorted collection.
    ///
    /// # Errors
    ///
    /// [`AltsortError`](crate::errors::AltsortError) is returned when the input ends before a
    /// valid count is read, when the sizes cannot be generated, when a random source cannot be
    /// seeded, or when reading or writing fails. Output written before the failure is kept.
    pub fn run<R, W>(&self, rdr: R, mut wtr: W) -> Result<ArrayCollection>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(wtr, "{PROMPT}")?;
        wtr.flush()?;
        let n = read_natural_number(rdr, &mut wtr, &config::num_arrays_range())?;
        info!(n, "read number of arrays");

        let mut size_rng = self.size_rng()?;
        let mut value_rng = StdRng::from_rng(&mut size_rng)?;

        let sizes =
            generate_unique_sizes(n, &config::array_size_range(), self.strategy, &mut size_rng)?;
        let mut arrays = generate_arrays(&sizes, &mut value_rng);

        writeln!(wtr, "{GENERATED_HEADER}")?;
        arrays.write(&mut wtr)?;

        sort_alternating(&mut arrays);

        writeln!(wtr, "{SORTED_HEADER}")?;
        arrays.write(&mut wtr)?;
        wtr.flush()?;

        Ok(arrays)
    }
}
