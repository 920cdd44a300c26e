use trie_speller::{Dictionary, Error, Lexicon};

#[test]
fn test_inserted_words_stay_contained() {
    let mut dictionary = Dictionary::new();
    dictionary.insert("cat").unwrap();
    assert!(dictionary.contains("cat"));

    // Unrelated and overlapping insertions don't disturb earlier words
    for word in &["dog", "ca", "catalog", "cab", "zebra"] {
        dictionary.insert(word).unwrap();
        assert!(dictionary.contains("cat"));
    }

    for word in &["dog", "ca", "catalog", "cab", "zebra"] {
        assert!(dictionary.contains(word));
    }
}

#[test]
fn test_size_counts_every_insert() {
    let mut dictionary = Dictionary::new();
    dictionary.insert("cat").unwrap();
    dictionary.insert("cat").unwrap();

    assert_eq!(dictionary.size(), 2);
    assert!(dictionary.contains("cat"));

    // A rejected insert is not counted
    assert!(dictionary.insert("ca t").is_err());
    assert_eq!(dictionary.size(), 2);
}

#[test]
fn test_empty_string_not_contained() {
    let dictionary = Dictionary::from_words(["cat", "cats", "car"]).unwrap();
    assert!(!dictionary.contains(""));

    let empty = Dictionary::new();
    assert!(!empty.contains(""));
}

#[test]
fn test_prefix_is_not_a_word() {
    let dictionary = Dictionary::from_words(["cat", "cats", "car"]).unwrap();

    assert!(!dictionary.contains("ca"));
    assert!(!dictionary.contains("c"));
    assert!(dictionary.contains("cats"));
    assert!(dictionary.contains("cat"));
    assert!(dictionary.contains("car"));
    assert!(!dictionary.contains("cars"));
}

#[test]
fn test_contains_is_idempotent() {
    let dictionary = Dictionary::from_words(["idem", "potent"]).unwrap();
    let nodes = dictionary.node_count();
    let size = dictionary.size();

    for _ in 0..10 {
        assert!(dictionary.contains("idem"));
        assert!(!dictionary.contains("idempotent"));
        assert!(!dictionary.contains("pot"));
    }

    assert_eq!(dictionary.node_count(), nodes);
    assert_eq!(dictionary.size(), size);
}

#[test]
fn test_insert_rejects_out_of_alphabet() {
    let mut dictionary = Dictionary::new();

    for (word, bad, position) in &[("Cat", 'C', 0), ("it's", '\'', 2), ("nai\u{308}ve", '\u{308}', 3), ("a1", '1', 1)] {
        match dictionary.insert(word) {
            Err(Error::InvalidCharacter {
                character,
                position: at,
                ..
            }) => {
                assert_eq!(character, *bad);
                assert_eq!(at, *position);
            }
            other => panic!("expected InvalidCharacter for {:?}, got {:?}", word, other),
        }
    }

    assert!(dictionary.is_empty());
    assert_eq!(dictionary.node_count(), 1);
}

#[test]
fn test_contains_folds_case_but_insert_does_not() {
    let mut dictionary = Dictionary::new();
    dictionary.insert("rust").unwrap();

    assert!(dictionary.contains("RUST"));
    assert!(dictionary.contains("Rust"));
    assert!(dictionary.insert("Rust").is_err());
}

#[test]
fn test_frozen_dictionary_answers_like_unfrozen() {
    let words = ["alpha", "alphabet", "beta"];
    let dictionary = Dictionary::from_words(words).unwrap();
    let size = dictionary.size();
    let frozen = dictionary.freeze();

    assert_eq!(frozen.size(), size);
    for word in &words {
        assert!(Lexicon::contains(&frozen, word));
    }
    assert!(!frozen.contains("alph"));
}

#[test]
fn test_words_lists_distinct_entries() {
    let dictionary = Dictionary::from_words(["b", "a", "ab", "a"]).unwrap();
    assert_eq!(dictionary.words(), vec!["a", "ab", "b"]);
    assert_eq!(dictionary.size(), 4);
    assert_eq!(dictionary.distinct_words(), 3);
}
