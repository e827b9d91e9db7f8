#![allow(missing_docs)]

use kmpsub::{
    CountOptions, FailureTable, InvalidArgument, Matcher, ReplaceOptions, SubstError, count,
    count_occurrences, naive, replace, replace_occurrences, str_count, str_replace,
};
use quickcheck_macros::quickcheck;
use rstest::rstest;

#[rstest]
#[case::deletion("aNiNib", "Ni", "", 2, "ab")]
#[case::no_match("abcabc", "xyz", "Q", 0, "abcabc")]
#[case::growing("NiNi", "Ni", "ABC", 2, "ABCABC")]
#[case::shrinking("NiNiNi", "NiNi", "X", 1, "XNi")]
#[case::adjacent_overlap("NiNiNi", "NiN", "-", 1, "-iNi")]
#[case::trailing_partial("abcab", "abc", "Z", 1, "Zab")]
fn boundary_cases(
    #[case] text: &str,
    #[case] key: &str,
    #[case] value: &str,
    #[case] expected_count: usize,
    #[case] expected: &str,
) {
    assert_eq!(str_count(text, key).unwrap(), expected_count);
    assert_eq!(str_replace(text, key, value).unwrap(), expected);
}

#[test]
fn explicit_table_workflow() {
    let key = b"Ni";
    let table = FailureTable::build(key).unwrap();
    let text = b"NiNi NI N ni NNi nI Niinii";
    assert_eq!(count_occurrences(text, key, &table).unwrap(), 4);
    assert_eq!(
        replace_occurrences(text, key, b"AB", &table).unwrap(),
        b"ABAB NI N ni NAB nI ABinii"
    );
}

#[test]
fn errors_are_typed() {
    let err = FailureTable::build::<u8>(&[]).unwrap_err();
    assert_eq!(err, SubstError::InvalidArgument(InvalidArgument::EmptyKey));
    assert_eq!(err.to_string(), "invalid argument: search key is empty");

    let table = FailureTable::build(b"abc").unwrap();
    let err = count_occurrences(b"abcabc", b"abcd", &table).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument: failure table has 4 entries but the key has length 4"
    );
}

#[test]
fn counting_modes() {
    let matcher = Matcher::new(b"aa".as_slice()).unwrap();
    assert_eq!(matcher.count_with(b"aaaa", CountOptions::default()), 2);
    assert_eq!(matcher.count_with(b"aaaa", CountOptions { overlapping: true }), 3);
}

#[test]
fn limited_substitution() {
    let matcher = Matcher::new(b"Ni".as_slice()).unwrap();
    let out = matcher.substitute(b"NiNiNi", b"", ReplaceOptions { limit: Some(1) });
    assert_eq!(out.text, b"NiNi");
    assert_eq!(out.replacements, 1);
}

#[test]
fn snapshot_transcript() {
    let matcher = Matcher::new(b"Ni".as_slice()).unwrap();
    let mut transcript = String::new();
    for text in ["Ni N NI nI NiiniNi Niii", "NiNi NI N ni NNi nI Niinii", "aNiNib"] {
        let offsets: Vec<_> = matcher.find_iter(text.as_bytes()).collect();
        let replaced = matcher.replace(text.as_bytes(), b"XYZ");
        transcript.push_str(&format!(
            "{text:?} offsets={offsets:?} -> {:?}\n",
            String::from_utf8_lossy(&replaced)
        ));
    }
    insta::assert_snapshot!(transcript, @r#"
    "Ni N NI nI NiiniNi Niii" offsets=[0, 11, 16, 19] -> "XYZ N NI nI XYZiniXYZ XYZii"
    "NiNi NI N ni NNi nI Niinii" offsets=[0, 2, 14, 20] -> "XYZXYZ NI N ni NXYZ nI XYZinii"
    "aNiNib" offsets=[1, 3] -> "aXYZXYZb"
    "#);
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn free_functions_agree_with_naive(text: Vec<u8>, key: Vec<u8>, value: Vec<u8>) -> bool {
    if key.is_empty() {
        return count(&text, &key).is_err() && replace(&text, &key, &value).is_err();
    }
    count(&text, &key).unwrap() == naive::count(&text, &key)
        && replace(&text, &key, &value).unwrap() == naive::replace(&text, &key, &value)
}
