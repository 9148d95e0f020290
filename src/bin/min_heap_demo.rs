//! Walks a handful of words through a `MinHeap` and prints each stage.
//!
//! ```sh
//! cargo run --bin min-heap-demo
//! cargo run --bin min-heap-demo -- --verbose zulu yankee xray
//! ```

use argh::FromArgs;
use log::{debug, info};
use rust_min_heap::MinHeap;

const DEFAULT_WORDS: [&str; 4] = ["delta", "alpha", "charlie", "bravo"];

/// Insert words into a min-heap, then peek and extract the smallest.
#[derive(FromArgs, Debug, PartialEq)]
struct Arguments {
    /// enable debug logging
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// words to insert, in order
    #[argh(positional)]
    words: Vec<String>,
}

fn main() {
    let args: Arguments = argh::from_env();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    debug!("arguments: {args:#?}");

    let words = if args.words.is_empty() {
        DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
    } else {
        args.words
    };

    let mut heap = MinHeap::with_capacity(words.len());
    for word in words {
        debug!("inserting {word}");
        heap.push(word);
    }

    info!("heap contents: {heap}");
    match heap.peek() {
        Some(min) => info!("smallest element: {min}"),
        None => info!("heap is empty"),
    }
    info!("heap size: {}", heap.len());

    match heap.pop() {
        Some(removed) => info!("removed: {removed}"),
        None => info!("nothing to remove"),
    }
    info!("after removal: {heap}");
}
