//! Times inserting every distinct word of the input file into a fresh,
//! empty table.

use mapbench::{count_words, load, time_sets, StdWordMap, WordMap};
use std::env;
use std::process;

fn main() {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: perfset FILE");
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

    let (_scratch, elapsed) = time_sets::<StdWordMap>(&keys);
    println!("setting {} keys: {elapsed:?}", keys.len());
}
