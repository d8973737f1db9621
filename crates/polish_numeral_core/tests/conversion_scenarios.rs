use polish_numeral_core::{convert, ConversionError, Numeral};

fn words(value: u32) -> String {
    convert(value).unwrap().words().to_string()
}

#[test]
fn small_numbers_use_lexicon_words() {
    assert_eq!(words(0), "zero");
    assert_eq!(words(1), "jeden");
    assert_eq!(words(10), "dziesięć");
    assert_eq!(words(11), "jedenaście");
    assert_eq!(words(19), "dziewiętnaście");
    assert_eq!(words(100), "sto");
}

#[test]
fn compound_numbers_below_thousand() {
    assert_eq!(words(21), "dwadzieścia jeden");
    assert_eq!(words(123), "sto dwadzieścia trzy");
    assert_eq!(words(110), "sto dziesięć");
    assert_eq!(words(999), "dziewięćset dziewięćdziesiąt dziewięć");
}

#[test]
fn teen_suffix_derives_missing_teens() {
    assert_eq!(words(12), "dwanaście");
    assert_eq!(words(13), "trzynaście");
    assert_eq!(words(17), "siedemnaście");
    assert_eq!(words(18), "osiemnaście");
    assert_eq!(words(318), "trzysta osiemnaście");
}

#[test]
fn tens_suffix_derives_fifty_to_ninety() {
    assert_eq!(words(55), "pięćdziesiąt pięć");
    assert_eq!(words(60), "sześćdziesiąt");
    assert_eq!(words(90), "dziewięćdziesiąt");
}

#[test]
fn hundreds_suffixes_split_at_five() {
    assert_eq!(words(300), "trzysta");
    assert_eq!(words(400), "czterysta");
    assert_eq!(words(500), "pięćset");
    assert_eq!(words(700), "siedemset");
    assert_eq!(words(250), "dwieście pięćdziesiąt");
}

#[test]
fn exact_magnitude_nouns_take_fast_path() {
    assert_eq!(words(1_000), "tysiąc");
    assert_eq!(words(1_000_000), "milion");
    assert_eq!(words(1_000_000_000), "miliard");
}

#[test]
fn thousands_follow_irregular_case_table() {
    assert_eq!(words(2_000), "dwa tysiące");
    assert_eq!(words(5_000), "pięć tysięcy");
    assert_eq!(words(12_000), "dwanaście tysięcy");
    assert_eq!(words(22_000), "dwadzieścia dwa tysiące");
    assert_eq!(words(250_000), "dwieście pięćdziesiąt tysięcy");
}

#[test]
fn case_suffixes_inflect_millions_and_billions() {
    assert_eq!(words(2_000_000), "dwa miliony");
    assert_eq!(words(5_000_000), "pięć milionów");
    assert_eq!(words(14_000_000), "czternaście milionów");
    assert_eq!(words(2_000_000_000), "dwa miliardy");
}

#[test]
fn units_digit_one_in_higher_group_selects_genitive_plural() {
    // The documented grammar rule: digit 1 maps to the genitive plural noun.
    assert_eq!(words(1_001), "jeden tysięcy jeden");
    assert_eq!(words(1_000_001), "jeden milionów jeden");
    assert_eq!(words(21_000), "dwadzieścia jeden tysięcy");
}

#[test]
fn group_noun_is_emitted_even_without_units() {
    assert_eq!(words(20_001), "dwadzieścia tysięcy jeden");
    assert_eq!(words(300_000), "trzysta tysięcy");
}

#[test]
fn empty_groups_contribute_nothing() {
    assert_eq!(words(5_000_005), "pięć milionów pięć");
    assert_eq!(words(2_000_300), "dwa miliony trzysta");
}

#[test]
fn maximum_value_converts_fully() {
    assert_eq!(
        words(2_147_483_647),
        "dwa miliardy sto czterdzieści siedem milionów czterysta osiemdziesiąt trzy tysiące sześćset czterdzieści siedem"
    );
}

#[test]
fn values_outside_range_are_rejected() {
    assert_eq!(
        convert(2_147_483_648_i64).unwrap_err(),
        ConversionError::UnsupportedNumber {
            value: 2_147_483_648
        }
    );
    assert_eq!(
        convert(-1_i64).unwrap_err(),
        ConversionError::UnsupportedNumber { value: -1 }
    );
    assert!(convert(u64::MAX).is_err());
    assert!(convert(i128::MIN).is_err());
}

#[test]
fn numeral_exposes_number_and_phrase() {
    let numeral: Numeral = convert(2_000_000_u32).unwrap();
    assert_eq!(numeral.number(), 2_000_000);
    assert_eq!(numeral.words(), "dwa miliony");
    assert_eq!(numeral.to_string(), "dwa miliony");
    assert_eq!(String::from(numeral), "dwa miliony");
}
