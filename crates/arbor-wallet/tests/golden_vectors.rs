//! End-to-end golden vectors: phrase -> seed -> master key -> derived
//! address / serialized extended key, pinned against recorded outputs.

use arbor_primitives::mnemonic::Mnemonic;
use arbor_wallet::address::{to_checksum_address, AddressScheme, Ethereum};
use arbor_wallet::serializer::{deserialize, serialize};
use arbor_wallet::{DerivationPath, ExtendedKey, Network};

/// The standard development mnemonic (all-zero 128-bit entropy).
const ZERO_PHRASE: &str = "abandon abandon abandon abandon abandon abandon \
                           abandon abandon abandon abandon abandon about";

fn master_from_phrase(phrase: &str, passphrase: &str) -> ExtendedKey {
    let mnemonic = Mnemonic::from_phrase(phrase).unwrap();
    let seed = mnemonic.to_seed(passphrase);
    ExtendedKey::master_from_seed(seed.as_ref()).unwrap()
}

#[test]
fn zero_entropy_phrase_to_first_ethereum_address() {
    let mnemonic = Mnemonic::from_phrase(ZERO_PHRASE).unwrap();
    let seed = mnemonic.to_seed("");
    assert_eq!(
        seed.to_hex(),
        "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
         9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
    );

    let master = ExtendedKey::master_from_seed(seed.as_ref()).unwrap();
    let path: DerivationPath = "m/44'/60'/0'/0/0".parse().unwrap();
    let key = master.derive_path(&path).unwrap();

    let address = Ethereum.derive_address(&key.public_key());
    assert_eq!(address, "0x9858effd232b4033e47d90003d41ec34ecaeda94");
    assert_eq!(
        to_checksum_address(&address).unwrap(),
        "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"
    );
}

#[test]
fn builder_path_matches_parsed_path() {
    let master = master_from_phrase(ZERO_PHRASE, "");
    let parsed: DerivationPath = "m/44'/60'/0'/0/0".parse().unwrap();
    let built = DerivationPath::ethereum(0, 0).unwrap();
    assert_eq!(
        master.derive_path(&parsed).unwrap(),
        master.derive_path(&built).unwrap()
    );
}

#[test]
fn phrase_to_master_xprv_pairs() {
    // Recorded (phrase, empty-passphrase master xprv) pairs.
    let pairs = [
        (
            "social anchor educate fold ancient wheel advice praise file fix attitude ivory",
            "xprv9s21ZrQH143K3ZsozYTEYBEJ4wL4MRPMrvXcNNmqNfbEuWKqMgRDD2psd7HrE5yWEd2UFK2TtdEJnfDFNYibjKzMGz7uYdze5vbjGRZHKmU",
        ),
        (
            "mother dress law arena peasant camera forum wisdom mutual inform silk regret",
            "xprv9s21ZrQH143K3QTdXMBavciDtwpgdgjKwu9WEJsc1rBdwjq11PsckuaNwhMGr8gDTUuKZaV8dDemXZuprfcqNhLDT3TJ16Kpq1DAFZ35WSE",
        ),
        (
            "caution guide valley easily latin already visual fancy fork car switch runway \
             vicious polar surprise fence boil light nut invite fiction visa hamster coyote",
            "xprv9s21ZrQH143K4VcEtb888srakzAVaKWE9L3Pyy6AxEhWLtJu5FK18mDHE1ar7LHT99KrrqcVQxRMSqnXj65vsuWDGUxeT3AVKVB7YW8FDoD",
        ),
    ];

    for (phrase, xprv) in pairs {
        let master = master_from_phrase(phrase, "");
        assert_eq!(serialize(&master, Network::Mainnet), xprv, "phrase: {phrase}");

        // The serialized form is the interoperability boundary: parsing it
        // back must reproduce the key exactly.
        assert_eq!(deserialize(xprv, Network::Mainnet).unwrap(), master);
    }
}

#[test]
fn neutered_master_serializes_as_xpub() {
    let master = master_from_phrase(ZERO_PHRASE, "");
    let xpub = serialize(&master.neuter(), Network::Mainnet);
    assert!(xpub.starts_with("xpub"));
    assert_eq!(deserialize(&xpub, Network::Mainnet).unwrap(), master.neuter());
}

#[test]
fn passphrase_changes_the_tree() {
    let plain = master_from_phrase(ZERO_PHRASE, "");
    let protected = master_from_phrase(ZERO_PHRASE, "TREZOR");
    assert_ne!(plain, protected);
}
