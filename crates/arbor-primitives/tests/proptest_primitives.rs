use proptest::prelude::*;

use arbor_primitives::base58;
use arbor_primitives::ec::{PrivateKey, PublicKey};
use arbor_primitives::mnemonic::{Mnemonic, Wordlist};

fn test_wordlist() -> Wordlist {
    Wordlist::new((0..Wordlist::SIZE).map(|i| format!("w{i:04}"))).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn base58_check_roundtrip(payload in prop::collection::vec(any::<u8>(), 0..128)) {
        let encoded = base58::check_encode(&payload);
        prop_assert_eq!(base58::check_decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn private_key_bytes_roundtrip(bytes in prop::array::uniform32(any::<u8>())) {
        // Not every 32-byte array is a valid scalar (must be nonzero and
        // below the curve order).
        if let Ok(key) = PrivateKey::from_bytes(&bytes) {
            prop_assert_eq!(key.to_bytes(), bytes);
            let restored = PrivateKey::from_hex(&key.to_hex()).unwrap();
            prop_assert_eq!(key, restored);
        }
    }

    #[test]
    fn public_key_sec1_roundtrip(bytes in prop::array::uniform32(any::<u8>())) {
        if let Ok(key) = PrivateKey::from_bytes(&bytes) {
            let public = key.public_key();
            let compressed = PublicKey::from_bytes(&public.to_compressed()).unwrap();
            let uncompressed = PublicKey::from_bytes(&public.to_uncompressed()).unwrap();
            prop_assert_eq!(&compressed, &public);
            prop_assert_eq!(&uncompressed, &public);
        }
    }

    #[test]
    fn mnemonic_entropy_roundtrip_128(entropy in prop::array::uniform16(any::<u8>())) {
        let wordlist = test_wordlist();
        let mnemonic = Mnemonic::from_entropy(&entropy, &wordlist).unwrap();
        prop_assert_eq!(mnemonic.word_count(), 12);
        prop_assert!(mnemonic.validate(&wordlist).is_ok());
        prop_assert_eq!(mnemonic.to_entropy(&wordlist).unwrap(), entropy.to_vec());
    }

    #[test]
    fn mnemonic_entropy_roundtrip_256(entropy in prop::array::uniform32(any::<u8>())) {
        let wordlist = test_wordlist();
        let mnemonic = Mnemonic::from_entropy(&entropy, &wordlist).unwrap();
        prop_assert_eq!(mnemonic.word_count(), 24);
        prop_assert!(mnemonic.validate(&wordlist).is_ok());
        prop_assert_eq!(mnemonic.to_entropy(&wordlist).unwrap(), entropy.to_vec());
    }

    #[test]
    fn mnemonic_phrase_roundtrip(entropy in prop::array::uniform16(any::<u8>())) {
        let wordlist = test_wordlist();
        let mnemonic = Mnemonic::from_entropy(&entropy, &wordlist).unwrap();
        let reparsed = Mnemonic::from_phrase(&mnemonic.phrase()).unwrap();
        prop_assert_eq!(reparsed.words(), mnemonic.words());
        let reparsed_seed = reparsed.to_seed("pw");
        let mnemonic_seed = mnemonic.to_seed("pw");
        prop_assert_eq!(
            reparsed_seed.as_bytes(),
            mnemonic_seed.as_bytes()
        );
    }
}
