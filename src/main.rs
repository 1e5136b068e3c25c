// numgen: print a uniformly shuffled sequence of the integers 0..N-1
// usage: numgen <N>

use std::{env, process};

// mainline - validate the count, then generate, shuffle and print
fn main() {
    if let Err(e) = numgen::run(env::args()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
