use std::collections::BTreeMap;

pub fn count_characters(input: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for character in input.chars() {
        *counts.entry(character).or_insert(0) += 1;
    }
    counts
}
