#![allow(missing_docs)]

use kmpsub::{Matcher, Substitute, narrow, wide};

#[test]
fn wide_matcher_counts_and_replaces() {
    let key = wide("Ni");
    let matcher = Matcher::new(key.as_slice()).unwrap();

    let text = wide("NiNi NI N ni NNi nI Niinii");
    assert_eq!(matcher.count(&text), 4);
    assert_eq!(narrow(&matcher.replace(&text, &wide("NI"))), "NINI NI N ni NNI nI NIinii");
}

#[test]
fn wide_text_with_surrogate_pairs() {
    // Each emoji is two UTF-16 units; the key spans a whole pair.
    let text = wide("a😀b😀c");
    let out = text.replace_key(&wide("😀"), &wide("-")).unwrap();
    assert_eq!(narrow(&out), "a-b-c");
    assert_eq!(text.count_key(&wide("😀")).unwrap(), 2);
}

#[test]
fn extension_trait_on_arrays_and_vecs() {
    assert_eq!(b"aNiNib".replace_key(b"Ni", b"").unwrap(), b"ab");
    assert_eq!(vec![1u32, 2, 1, 2].count_key(&[1, 2]).unwrap(), 2);
    assert!(vec![1u32].count_key(&[]).is_err());
}
