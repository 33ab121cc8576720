//! Times repeated lookups of every distinct word of the input file against
//! the frequency table built from that file.

use mapbench::{count_words, load, time_gets, StdWordMap, WordMap, RUNS};
use std::env;
use std::process;

fn main() {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: perfget FILE");
        process::exit(1);
    };

    let contents = match load(&path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("error reading {path}: {err}");
            process::exit(1);
        }
    };

    let counts: StdWordMap = count_words(&contents);
    let keys = WordMap::keys(&counts);
    drop(contents);

    let elapsed = time_gets(&counts, &keys, RUNS);
    println!("{RUNS} runs getting {} keys: {elapsed:?}", keys.len());
}
