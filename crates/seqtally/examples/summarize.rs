//! Demonstration of all four transforms
//!
//! Usage: cargo run --example summarize -p seqtally

use seqtally::{Family, Person, even_numbers, family_statistics, letter_frequency, squared_multiples};

fn main() {
    println!("even_numbers(20)      = {:?}", even_numbers(20).unwrap());
    println!("squared_multiples(30) = {:?}", squared_multiples(30).unwrap());

    let families = [
        Family::new(1, vec![Person::new(34), Person::new(31), Person::new(4)]),
        Family::new(2, vec![Person::new(70), Person::new(65)]),
        Family::new(3, vec![]),
    ];
    println!();
    for summary in family_statistics(&families) {
        println!(
            "family {}: {} members, average age {}",
            summary.family_id, summary.number_of_family_members, summary.average_age
        );
    }

    println!();
    let text = "The quick brown fox jumps over the lazy dog";
    for entry in letter_frequency(text) {
        println!("{}: {}", entry.letter, entry.count);
    }
}
