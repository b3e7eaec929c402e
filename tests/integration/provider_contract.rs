//! Integration test: the provider contract, checked against every backend.
//!
//! Protocol code must be able to swap providers without noticing, so each
//! property here runs unchanged over the null and dalek backends.

use crypto_provider::{Backend, CryptoError, Library};

fn backends() -> Vec<Box<dyn Library>> {
    vec![Backend::Null.library(), Backend::Dalek.library()]
}

// === Keys ===

#[test]
fn contract_generated_public_key_deterministic() {
    for lib in backends() {
        for seed in [&b"a"[..], &b"seed"[..], &[0u8; 200][..]] {
            let a = lib.generate_public_key(seed).unwrap();
            let b = lib.generate_public_key(seed).unwrap();
            assert_eq!(a.to_bytes(), b.to_bytes(), "{}", lib.backend());
            assert!(!a.is_private());
        }
    }
}

#[test]
fn contract_private_derives_matching_public() {
    for lib in backends() {
        let private = lib.generate_private_key(b"correspondence").unwrap();
        let public = lib.generate_public_key(b"correspondence").unwrap();
        assert!(private.is_private());
        assert_eq!(
            private.public_key().to_bytes(),
            public.to_bytes(),
            "{}",
            lib.backend()
        );
        assert!(private.verify_key(public.as_ref()));
        assert!(public.verify_key(private.as_ref()));
    }
}

#[test]
fn contract_public_key_never_yields_private() {
    for lib in backends() {
        let public = lib.generate_public_key(b"one-way").unwrap();
        assert!(!public.public_key().is_private());
        assert!(matches!(public.sign(b"m"), Err(CryptoError::NotPrivate)));
    }
}

#[test]
fn contract_public_key_bytes_roundtrip() {
    for lib in backends() {
        let original = lib.generate_public_key(b"roundtrip").unwrap();
        let reloaded = lib.load_public_key_from_bytes(&original.to_bytes()).unwrap();
        assert_eq!(reloaded.to_bytes(), original.to_bytes());
        assert_eq!(reloaded.algorithm(), original.algorithm());
    }
}

#[test]
fn contract_private_key_bytes_roundtrip() {
    for lib in backends() {
        let original = lib.create_private_key().unwrap();
        let reloaded = lib.load_private_key_from_bytes(&original.to_bytes()).unwrap();
        assert!(reloaded.is_private());
        assert_eq!(
            reloaded.public_key().to_bytes(),
            original.public_key().to_bytes()
        );
    }
}

#[test]
fn contract_fresh_private_keys_differ() {
    for lib in backends() {
        let a = lib.create_private_key().unwrap();
        let b = lib.create_private_key().unwrap();
        assert_ne!(a.to_bytes(), b.to_bytes(), "{}", lib.backend());
    }
}

#[test]
fn contract_fresh_keys_meet_minimum_size() {
    for lib in backends() {
        let key = lib.create_private_key().unwrap();
        assert!(key.key_size() >= lib.minimum_key_size(), "{}", lib.backend());
    }
}

#[test]
fn contract_generated_and_loaded_keys_meet_minimum_size() {
    for lib in backends() {
        let minimum = lib.minimum_key_size();
        for seed in [&b"a"[..], &b"xy"[..], &b"a-much-longer-seed"[..]] {
            let private = lib.generate_private_key(seed).unwrap();
            let public = lib.generate_public_key(seed).unwrap();
            assert!(private.key_size() >= minimum, "{}", lib.backend());
            assert!(public.key_size() >= minimum, "{}", lib.backend());

            let loaded_private = lib.load_private_key_from_bytes(&private.to_bytes()).unwrap();
            let loaded_public = lib.load_public_key_from_bytes(&public.to_bytes()).unwrap();
            assert!(loaded_private.key_size() >= minimum, "{}", lib.backend());
            assert!(loaded_public.key_size() >= minimum, "{}", lib.backend());
        }
    }
}

#[test]
fn contract_undersized_material_is_format_error() {
    for lib in backends() {
        let too_short = vec![0x5Au8; lib.minimum_key_size() / 8 - 1];
        assert!(
            matches!(
                lib.load_public_key_from_bytes(&too_short),
                Err(CryptoError::Format(_))
            ),
            "{}",
            lib.backend()
        );
        assert!(
            matches!(
                lib.load_private_key_from_bytes(&too_short),
                Err(CryptoError::Format(_))
            ),
            "{}",
            lib.backend()
        );
    }
}

#[test]
fn contract_sign_and_verify() {
    for lib in backends() {
        let private = lib.generate_private_key(b"signer").unwrap();
        let public = private.public_key();
        let sig = private.sign(b"round 7 commitment").unwrap();
        assert!(public.verify(b"round 7 commitment", &sig));
        assert!(!public.verify(b"round 8 commitment", &sig));

        let stranger = lib.generate_public_key(b"stranger").unwrap();
        assert!(!stranger.verify(b"round 7 commitment", &sig));
    }
}

#[test]
fn contract_empty_key_bytes_rejected() {
    for lib in backends() {
        assert!(matches!(
            lib.load_public_key_from_bytes(&[]),
            Err(CryptoError::Format(_))
        ));
        assert!(matches!(
            lib.load_private_key_from_bytes(&[]),
            Err(CryptoError::Format(_))
        ));
    }
}

#[test]
fn contract_empty_seed_rejected() {
    for lib in backends() {
        assert!(matches!(
            lib.generate_public_key(&[]),
            Err(CryptoError::Format(_))
        ));
        assert!(matches!(
            lib.generate_private_key(&[]),
            Err(CryptoError::Format(_))
        ));
        assert!(matches!(
            lib.generate_diffie_hellman(&[]),
            Err(CryptoError::Format(_))
        ));
        assert!(lib.random_number_generator(&[]).is_err());
    }
}

// === Diffie-Hellman ===

#[test]
fn contract_same_seed_dh_identical() {
    for lib in backends() {
        let a = lib.generate_diffie_hellman(b"dh").unwrap();
        let b = lib.generate_diffie_hellman(b"dh").unwrap();
        assert_eq!(a.private_component(), b.private_component());
        assert_eq!(a.public_component(), b.public_component());
        assert_eq!(
            a.shared_secret(&b.public_component()).unwrap(),
            b.shared_secret(&a.public_component()).unwrap()
        );
    }
}

#[test]
fn contract_fresh_dh_agree() {
    for lib in backends() {
        let alice = lib.create_diffie_hellman().unwrap();
        let bob = lib.create_diffie_hellman().unwrap();
        let ab = alice.shared_secret(&bob.public_component()).unwrap();
        let ba = bob.shared_secret(&alice.public_component()).unwrap();
        assert_eq!(ab, ba, "{}", lib.backend());
    }
}

#[test]
fn contract_loaded_dh_restores_exchange() {
    for lib in backends() {
        let alice = lib.create_diffie_hellman().unwrap();
        let bob = lib.create_diffie_hellman().unwrap();
        let restored = lib.load_diffie_hellman(&alice.private_component()).unwrap();
        assert_eq!(restored.public_component(), alice.public_component());
        assert_eq!(
            restored.shared_secret(&bob.public_component()).unwrap(),
            alice.shared_secret(&bob.public_component()).unwrap()
        );
    }
}

#[test]
fn contract_malformed_dh_rejected() {
    for lib in backends() {
        assert!(matches!(
            lib.load_diffie_hellman(&[]),
            Err(CryptoError::Format(_))
        ));
        let dh = lib.create_diffie_hellman().unwrap();
        assert!(matches!(dh.shared_secret(&[]), Err(CryptoError::Format(_))));
    }
}

// === Hash and Random ===

#[test]
fn contract_hash_deterministic_and_incremental() {
    for lib in backends() {
        let mut one_shot = lib.hash_algorithm();
        let expected = one_shot.hash_data(b"announcement|commitment|challenge");
        assert_eq!(expected.len(), one_shot.digest_size());

        let mut incremental = lib.hash_algorithm();
        incremental.update(b"announcement|");
        incremental.update(b"commitment|");
        incremental.update(b"challenge");
        assert_eq!(incremental.finalize(), expected);

        // Finalize returned the object to Init.
        incremental.update(b"announcement|commitment|challenge");
        assert_eq!(incremental.finalize(), expected);
    }
}

#[test]
fn contract_rng_same_seed_same_sequence() {
    for lib in backends() {
        let seed = vec![3u8; lib.rng_optimal_seed_size()];
        let mut a = lib.random_number_generator(&seed).unwrap();
        let mut b = lib.random_number_generator(&seed).unwrap();
        assert_eq!(a.random_bytes(128), b.random_bytes(128));
        assert_eq!(a.next_u32(), b.next_u32());
        assert_eq!(a.range_u64(0, 1000).unwrap(), b.range_u64(0, 1000).unwrap());
    }
}

#[test]
fn contract_rng_accepts_any_seed_length() {
    for lib in backends() {
        let optimal = lib.rng_optimal_seed_size();
        for len in [1, optimal - 1, optimal, optimal + 1, 10 * optimal] {
            assert!(lib.random_number_generator(&vec![1u8; len]).is_ok());
        }
    }
}

// === Integers ===

#[test]
fn contract_random_integer_exact_bits() {
    for lib in backends() {
        for bits in [1usize, 8, 31, 64, 257] {
            let v = lib.random_integer(bits, false).unwrap();
            assert_eq!(v.bit_count(), bits as u64);
            assert!(!v.is_negative());
        }
    }
}

#[test]
fn contract_random_prime_exact_bits() {
    for lib in backends() {
        for bits in [2usize, 16, 64, 128] {
            let p = lib.random_integer(bits, true).unwrap();
            assert_eq!(p.bit_count(), bits as u64);
            assert!(lib.is_probable_prime(&p), "{}: {p}", lib.backend());
        }
    }
}

#[test]
fn contract_random_integer_zero_bits_rejected() {
    for lib in backends() {
        assert!(matches!(
            lib.random_integer(0, false),
            Err(CryptoError::Range(_))
        ));
    }
}

#[test]
fn contract_random_integer_in_range() {
    for lib in backends() {
        let min = lib.integer_from_str("-1000").unwrap();
        let max = lib.integer_from_str("0x3e8").unwrap();
        for _ in 0..200 {
            let v = lib.random_integer_in_range(&min, &max, false).unwrap();
            assert!(v >= min && v <= max);
        }
    }
}

#[test]
fn contract_random_prime_in_range() {
    for lib in backends() {
        let min = lib.integer_from_int(1000);
        let max = lib.integer_from_int(2000);
        let p = lib.random_integer_in_range(&min, &max, true).unwrap();
        assert!(p >= min && p <= max);
        assert!(lib.is_probable_prime(&p));
    }
}

#[test]
fn contract_inverted_range_rejected() {
    for lib in backends() {
        let min = lib.integer_from_int(10);
        let max = lib.integer_from_int(9);
        assert!(matches!(
            lib.random_integer_in_range(&min, &max, false),
            Err(CryptoError::Range(_))
        ));
    }
}

#[test]
fn contract_integer_encodings_agree() {
    for lib in backends() {
        let from_int = lib.integer_from_int(-123_456_789);
        let from_str = lib.integer_from_str("-123456789").unwrap();
        let from_bytes = lib.integer_from_bytes(&from_int.to_bytes()).unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(from_int, from_bytes);
        assert!(matches!(
            lib.integer_from_bytes(&[]),
            Err(CryptoError::Format(_))
        ));
        assert!(matches!(
            lib.integer_from_str("twelve"),
            Err(CryptoError::Format(_))
        ));
    }
}

// === Cross-backend ===

#[test]
fn contract_null_keys_distinguishable_from_real() {
    let null = Backend::Null.library();
    let dalek = Backend::Dalek.library();
    let fake = null.generate_private_key(b"seed").unwrap();
    let real = dalek.generate_private_key(b"seed").unwrap();
    assert_ne!(fake.algorithm(), real.algorithm());
    assert!(!real.verify_key(fake.public_key().as_ref()));

    let fake_sig = fake.sign(b"msg").unwrap();
    assert!(!real.public_key().verify(b"msg", &fake_sig));
}

#[test]
fn contract_foreign_key_reported_as_backend_error() {
    let null = Backend::Null.library();
    let dalek = Backend::Dalek.library();
    let fake = null.generate_private_key(b"seed").unwrap();
    let real = dalek.generate_private_key(b"seed").unwrap();

    assert!(matches!(
        dalek.ensure_compatible(fake.public_key().as_ref()),
        Err(CryptoError::Backend(_))
    ));
    assert!(matches!(
        null.ensure_compatible(real.as_ref()),
        Err(CryptoError::Backend(_))
    ));
    assert!(dalek.ensure_compatible(real.public_key().as_ref()).is_ok());
}
