use afl::fuzz;
use dd_nid::{
    classify_id, format_rut, is_valid_rut, normalize_id, sanitize_rut, validate_dni,
    validate_document, validate_nie, DocumentKind, NationalId,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

/// Sprinkles separators that every validator is supposed to ignore.
fn gen_separated(input: &str, rng: &mut StdRng) -> String {
    let mut output = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        match rng.gen_range::<u8, _>(0..8) {
            0 => output.push(' '),
            1 => output.push('-'),
            _ => {}
        }
        if rng.gen_bool(0.5) {
            output.extend(c.to_lowercase());
        } else {
            output.push(c);
        }
    }
    output
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let normalized = normalize_id(input);
    assert_eq!(normalize_id(&normalized), normalized);

    let kind = classify_id(input);
    if kind != DocumentKind::Dni {
        assert!(!validate_dni(input));
    }
    if kind != DocumentKind::Nie {
        assert!(!validate_nie(input));
    }

    let separated = gen_separated(&normalized, &mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Normalized: {:?}", normalized);
        println!("Separated: {:?}", separated);
        println!("Kind: {:?}", kind);
    }

    // Case, whitespace and hyphens never change the classification
    if normalize_id(&separated) == normalized {
        assert_eq!(classify_id(&separated), kind);
        assert_eq!(validate_dni(&separated), validate_dni(input));
        assert_eq!(validate_nie(&separated), validate_nie(input));
    }

    assert_eq!(
        is_valid_rut(input),
        is_valid_rut(&sanitize_rut(input)),
    );

    let validation = validate_document(input);
    assert_eq!(validation.is_valid, validation.document_type.is_some());

    // A valid RUT parses to the same id whether it's written with dots, hyphen or neither.
    // The only exception is a bare number that is also a valid DNI with a K letter.
    if is_valid_rut(input) {
        let formatted = format_rut(input).expect("valid ruts can be formatted");
        let expected = NationalId::parse(&formatted).expect("formatted ruts parse");
        assert_eq!(expected.kind(), DocumentKind::Rut);
        assert_eq!(expected.as_str(), sanitize_rut(input));

        for written in [formatted.replace('.', ""), sanitize_rut(input)] {
            let parsed = NationalId::parse(&written).expect("valid ruts parse");
            if parsed.kind() == DocumentKind::Dni {
                assert!(validate_dni(&written));
            } else {
                assert_eq!(parsed, expected);
            }
        }
    }

    if let Ok(id) = NationalId::parse(input) {
        let reparsed = NationalId::parse(&id.to_string()).expect("displayed ids parse back");
        assert_eq!(reparsed, id);
    }
}
