// numgen: print a uniformly shuffled sequence of the integers 0..N-1 (library)
// usage: numgen <N>
//
// Output is space-separated with no trailing newline, suitable for piping
// into programs that take a randomized permutation as input.

use anyhow::{bail, Error, Result};
use rand::{seq::SliceRandom, thread_rng, Rng};
use std::{
    env,
    io,
    io::Write,
    iter::Iterator,
};

// get the requested count from the command line
fn count_from_cli(mut args_iter: impl Iterator<Item = String>) -> Result<i64, Error> {
    // skip command name in position 0 of command line argument list
    args_iter.next();

    // exactly one parameter is accepted: the count
    let count_param = match args_iter.next() {
        Some(param) => param,
        None => bail!("How many number ?"),
    };
    if args_iter.next().is_some() {
        bail!("How many number ?");
    }

    // parse the count as an integer
    match count_param.parse::<i64>() {
        Ok(count) => Ok(count),
        Err(_) => bail!("Not a number..."),
    }
}

// render the integers 0..count as decimal strings in ascending order
// a negative count yields an empty sequence, same as zero
fn number_sequence(count: i64) -> Vec<String> {
    (0..count).map(|n| n.to_string()).collect()
}

// shuffle the sequence into a uniformly random order
// the RNG is passed in so tests can seed it for reproducible orderings
fn shuffle_numbers(numbers: &mut [String], rng: &mut impl Rng) {
    numbers.shuffle(rng);
}

// join the sequence with single spaces: no leading, trailing or double space
fn format_numbers(numbers: &[String]) -> String {
    numbers.join(" ")
}

// run: library side of command line called from main()
pub fn run(args_iter: env::Args) -> Result<(), Error> {
    // get the count from the command line
    let count = count_from_cli(args_iter)?;

    // generate sequence and shuffle it
    let mut numbers = number_sequence(count);
    shuffle_numbers(&mut numbers, &mut thread_rng());

    // print without a trailing newline, flushing since nothing else will
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(format_numbers(&numbers).as_bytes())?;
    out.flush()?;

    // done
    Ok(())
}
