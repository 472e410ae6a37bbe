use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

pub struct Split {
    pub name: String,
    pub duration: Duration,
}

/**
 * Wall-clock timer for the phases of a render. Each call to `record_split`
 * closes the current phase under the given name and starts the next one.
 */
pub struct Stopwatch {
    pub splits: Vec<Split>,
    pub name: String,
    start_total: Instant,
    start_split: Instant,
}

impl Stopwatch {
    pub fn new(name: String) -> Stopwatch {
        let now = Instant::now();
        Stopwatch {
            splits: Vec::default(),
            name,
            start_total: now,
            start_split: now,
        }
    }

    pub fn total_elapsed(&self) -> Duration {
        self.start_total.elapsed()
    }

    pub fn record_split(&mut self, name: String) -> Duration {
        let duration = self.start_split.elapsed();
        self.start_split = Instant::now();
        self.splits.push(Split { name, duration });
        duration
    }

    pub fn display<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "Stopwatch: {};  Total elapsed duration: {:?}",
            self.name,
            self.total_elapsed()
        )?;
        for split in self.splits.iter() {
            writeln!(writer, "  {}: {:?}", split.name, split.duration)?;
        }
        Ok(())
    }
}
