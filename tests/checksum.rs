//! # Checksum Tests
//!
//! Error detection properties of the CRC-10 suffix.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crockid::{
    checksum::{append, calculate, extract, strip, validate},
    codec::{encode_fixed, value_symbol},
};

const SAMPLES: &[&str] = &[
    "ABC123",
    "ABC124",
    "XYZ789",
    "000C1S",
    "31MZ",
    "Z",
    "0123456789ABCDEFGHJKMNPQRSTVWXYZ",
];

#[test]
fn test_deterministic() {
    for data in SAMPLES {
        assert_eq!(calculate(data), calculate(data));
    }
}

#[test]
fn test_distinct_inputs_differ() {
    let a = calculate("ABC123").unwrap();
    let b = calculate("ABC124").unwrap();
    let c = calculate("XYZ789").unwrap();
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn test_append_strip_inverse() {
    for data in SAMPLES {
        let checked = append(data).unwrap();
        assert_eq!(checked.len(), data.len() + 2);
        assert_eq!(strip(&checked), *data);
        assert_eq!(extract(&checked), calculate(data).unwrap());
        assert!(validate(&checked), "{checked}");
    }
}

#[test]
fn test_first_character_corruption_detected() {
    let checked = append("ABC123").unwrap();
    let corrupted = format!("X{}", &checked[1..]);
    assert!(!validate(&corrupted));
}

#[test]
fn test_transposition_detected() {
    let checked = append("ABC123").unwrap();
    let swapped = format!("{}{}{}", &checked[1..2], &checked[0..1], &checked[2..]);
    assert!(!validate(&swapped));
}

#[test]
fn test_every_single_substitution_detected() {
    // Includes substitutions inside the checksum itself
    for data in ["ABC123", "000C1S", "7K9M2Q4R"] {
        let checked: Vec<char> = append(data).unwrap().chars().collect();
        for position in 0..checked.len() {
            for value in 0..32u8 {
                let replacement = value_symbol(value);
                if replacement == checked[position] {
                    continue;
                }
                let mut corrupted = checked.clone();
                corrupted[position] = replacement;
                let corrupted: String = corrupted.into_iter().collect();
                assert!(!validate(&corrupted), "missed {corrupted}");
            }
        }
    }
}

#[test]
fn test_adjacent_transpositions_detected() {
    for value in [12345u64, 99999, 0x0ABC_DEF0, 1 << 40] {
        let checked: Vec<char> = append(&encode_fixed(value, 10).unwrap())
            .unwrap()
            .chars()
            .collect();
        for i in 0..checked.len() - 1 {
            if checked[i] == checked[i + 1] {
                continue;
            }
            let mut swapped = checked.clone();
            swapped.swap(i, i + 1);
            let swapped: String = swapped.into_iter().collect();
            assert!(!validate(&swapped), "missed {swapped}");
        }
    }
}

#[test]
fn test_validate_is_case_insensitive() {
    let checked = append("XYZ789").unwrap();
    assert!(validate(&checked.to_lowercase()));
}

#[test]
fn test_boundaries() {
    assert_eq!(strip("AB"), "");
    assert_eq!(strip("A"), "");
    assert_eq!(extract("A"), "");
    assert_eq!(extract("AB"), "AB");
    assert!(!validate(""));
    assert!(!validate("AB"));
}

#[test]
fn test_invalid_data_rejected_not_zeroed() {
    // '*' must not be treated as '0'
    assert!(calculate("AB*1").is_err());
    let zeroed = append("AB01").unwrap();
    assert!(!validate(&format!("AB*1{}", extract(&zeroed))));
}
