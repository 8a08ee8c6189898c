//! Built-in known-answer tests.
//!
//! Run before trusting the tool on an offline machine: they exercise the hash
//! primitive and the full entropy → words → validation path against published
//! vectors.

use sha2::{Digest, Sha256};
use tracing::{error, info};

use crate::bits::Bits256;
use crate::core::constants::SECP256K1_ORDER_HEX;
use crate::dictionary::Language;
use crate::entropy::entropy_from_hex;
use crate::mnemonic::entropy_to_words;
use crate::validate::{
    is_valid_secp256k1_range, validate_mnemonic, ValidateResult, SECP256K1_ORDER,
};

/// An entropy/mnemonic pair from the published BIP-39 English test suite.
#[derive(Debug, Clone, Copy)]
pub struct Bip39Vector {
    pub entropy: &'static str,
    pub mnemonic: &'static str,
    /// Whether the entropy is below the secp256k1 group order.
    pub in_secp256k1_range: bool,
}

const fn v(
    entropy: &'static str,
    mnemonic: &'static str,
    in_secp256k1_range: bool,
) -> Bip39Vector {
    Bip39Vector {
        entropy,
        mnemonic,
        in_secp256k1_range,
    }
}

pub const BIP39_VECTORS: &[Bip39Vector] = &[
    v(
        "00000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        true,
    ),
    v(
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank yellow",
        true,
    ),
    v(
        "80808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
        true,
    ),
    v(
        "ffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        true,
    ),
    v(
        "000000000000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon agent",
        true,
    ),
    v(
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal will",
        true,
    ),
    v(
        "808080808080808080808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter always",
        true,
    ),
    v(
        "ffffffffffffffffffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo when",
        true,
    ),
    v(
        "0000000000000000000000000000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
        true,
    ),
    v(
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth title",
        true,
    ),
    v(
        "8080808080808080808080808080808080808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic bless",
        true,
    ),
    v(
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
        false,
    ),
    v(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364140",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo word priority hover one trouble parent target virus rug snack brass agree alpha",
        true,
    ),
    v(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo word priority hover one trouble parent target virus rug snack brass agree cheap",
        false,
    ),
    v(
        "9e885d952ad362caeb4efe34a8e91bd2",
        "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
        true,
    ),
    v(
        "6610b25967cdcca9d59875f5cb50b0ea75433311869e930b",
        "gravity machine north sort system female filter attitude volume fold club stay feature office ecology stable narrow fog",
        true,
    ),
    v(
        "68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c",
        "hamster diagram private dutch cause delay private meat slide toddler razor book happy fancy gospel tennis maple dilemma loan word shrug inflict delay length",
        true,
    ),
    v(
        "c0ba5a8e914111210f2bd131f3d5e08d",
        "scheme spot photo card baby mountain device kick cradle pact join borrow",
        true,
    ),
    v(
        "6d9be1ee6ebd27a258115aad99b7317b9c8d28b6d76431c3",
        "horn tenant knee talent sponsor spell gate clip pulse soap slush warm silver nephew swap uncle crack brave",
        true,
    ),
    v(
        "9f6a2878b2520799a44ef18bc7df394e7061a224d2c33cd015b157d746869863",
        "panda eyebrow bullet gorilla call smoke muffin taste mesh discover soft ostrich alcohol speed nation flash devote level hobby quick inner drive ghost inside",
        true,
    ),
    v(
        "23db8160a31d3e0dca3688ed941adbf3",
        "cat swing flag economy stadium alone churn speed unique patch report train",
        true,
    ),
    v(
        "8197a4a47f0425faeaa69deebc05ca29c0a5b5cc76ceacc0",
        "light rule cinnamon wrap drastic word pride squirrel upgrade then income fatal apart sustain crack supply proud access",
        true,
    ),
    v(
        "066dca1a2bb7e8a1db2832148ce9933eea0f3ac9548d793112d9a95c9407efad",
        "all hour make first leader extend hole alien behind guard gospel lava path output census museum junior mass reopen famous sing advance salt reform",
        true,
    ),
    v(
        "f30f8c1da665478f49b001d94c5fc452",
        "vessel ladder alter error federal sibling chat ability sun glass valve picture",
        true,
    ),
    v(
        "c10ec20dc3cd9f652c7fac2f1230f7a3c828389a14392f05",
        "scissors invite lock maple supreme raw rapid void congress muscle digital elegant little brisk hair mango congress clump",
        true,
    ),
    v(
        "f585c11aec520db57dd353c69554b21a89b20fb0650966fa0a9d6f74fd989d8f",
        "void come effort suffer camp survey warrior heavy shoot primary clutch crush open amazing screen patrol group space point ten exist slush involve unfold",
        true,
    ),
];

/// SHA-256 known answers: (message, digest hex).
pub const SHA256_VECTORS: &[(&str, &str)] = &[
    ("", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
    ("abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
    (
        "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    ),
];

/// Outcome of [`run_self_test`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfTestReport {
    pub passed: usize,
    /// Descriptions of the checks that failed.
    pub failures: Vec<String>,
}

impl SelfTestReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, ok: bool, what: impl FnOnce() -> String) {
        if ok {
            self.passed += 1;
        } else {
            let what = what();
            error!(check = %what, "Self-test failed");
            self.failures.push(what);
        }
    }
}

/// Run every built-in known-answer test.
pub fn run_self_test() -> SelfTestReport {
    let mut report = SelfTestReport::default();

    for (message, digest) in SHA256_VECTORS {
        let computed = hex::encode(Sha256::digest(message.as_bytes()));
        report.record(computed == *digest, || format!("sha256 of {:?}", message));
    }

    let order = Bits256::from_hex(SECP256K1_ORDER_HEX).ok();
    report.record(order == Some(SECP256K1_ORDER), || {
        "secp256k1 order constant".to_string()
    });

    for vector in BIP39_VECTORS {
        check_vector(vector, &mut report);
    }

    info!(
        passed = report.passed,
        failed = report.failures.len(),
        "Self-test complete"
    );
    report
}

fn check_vector(vector: &Bip39Vector, report: &mut SelfTestReport) {
    let label = || format!("vector {}", vector.entropy);
    let (entropy, bits) = match entropy_from_hex(vector.entropy) {
        Ok(parsed) => parsed,
        Err(_) => return report.record(false, label),
    };

    let encoded = entropy_to_words(&entropy, bits, Language::English)
        .map(|words| words.join(" "))
        .unwrap_or_default();
    report.record(encoded == vector.mnemonic, || format!("{}: encode", label()));

    report.record(
        is_valid_secp256k1_range(&entropy) == vector.in_secp256k1_range,
        || format!("{}: secp256k1 range", label()),
    );

    let words: Vec<&str> = vector.mnemonic.split(' ').collect();
    let expected = if vector.in_secp256k1_range {
        ValidateResult::Valid
    } else {
        ValidateResult::InvalidSecp256k1Range
    };
    report.record(
        validate_mnemonic(&words, Language::English, true) == expected,
        || format!("{}: validate", label()),
    );
}
