// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![deny(warnings, clippy::all)]

//! Demonstrate union and intersection of two fuzzy sets of fruits.

use fuzzy_set::{FuzzySet, InvalidDegree};
use tracing::{event, Level};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run() {
        event!(Level::ERROR, "{}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<(), InvalidDegree> {
    let mut fruits1 = FuzzySet::new();
    fruits1.add("apple", 0.7)?;
    fruits1.add("banana", 0.3)?;
    fruits1.add("cherry", 0.9)?;

    let mut fruits2 = FuzzySet::new();
    fruits2.add("banana", 0.5)?;
    fruits2.add("cherry", 0.6)?;
    fruits2.add("date", 0.8)?;

    println!("Fruits Set 1: {}", fruits1);
    println!("Fruits Set 2: {}", fruits2);

    println!("\nUnion: {}", fruits1.union(&fruits2));
    println!("Intersection: {}", fruits1.intersection(&fruits2));

    println!(
        "\nMembership of 'apple' in Set 1: {}",
        fruits1.get_membership("apple")
    );
    println!(
        "Membership of 'banana' in Set 2: {}",
        fruits2.get_membership("banana")
    );
    Ok(())
}
