#![no_main]

use arbitrary::Arbitrary;
use kmpsub::{FailureTable, ReplaceOptions, count_occurrences, naive, substitute};
use libfuzzer_sys::fuzz_target;

/// Raw fuzzer bytes folded onto a small alphabet so keys actually occur.
#[derive(Debug, Arbitrary)]
struct Case {
    alphabet: u8,
    text: Vec<u8>,
    key: Vec<u8>,
    value: Vec<u8>,
    limit: Option<u8>,
}

impl Case {
    fn fold(&self, bytes: &[u8]) -> Vec<u8> {
        // 2..=5 distinct symbols
        let symbols = 2 + self.alphabet % 4;
        bytes.iter().map(|b| b'a' + b % symbols).collect()
    }
}

fn check(case: &Case) {
    let text = case.fold(&case.text);
    let key = case.fold(&case.key);
    let value = case.fold(&case.value);

    let Ok(table) = FailureTable::build(&key) else {
        assert!(key.is_empty());
        return;
    };

    let count = count_occurrences(&text, &key, &table).unwrap();
    assert_eq!(count, naive::count(&text, &key), "count mismatch");

    let limit = case.limit.map(usize::from);
    let out = substitute(&text, &key, &value, &table, ReplaceOptions { limit }).unwrap();
    assert_eq!(out.replacements, limit.map_or(count, |l| l.min(count)));
    if limit.is_none() {
        assert_eq!(out.text, naive::replace(&text, &key, &value), "replace mismatch");
    }
}

fuzz_target!(|case: Case| check(&case));
