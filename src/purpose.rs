//! The certificate purpose catalog.
//!
//! Each purpose carries the key-usage and extended-key-usage attributes that
//! a certificate issued for that purpose must declare. The catalog is a
//! fixed, ordered set of three purposes; all behaviour is pure data lookup
//! against static tables, so the catalog is safely shared across threads
//! without synchronization.

/// A key-usage attribute token, as spelled in certificate request
/// configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyUsageOption {
    DigitalSignature,
    NonRepudiation,
    KeyEncipherment,
    DataEncipherment,
    KeyAgreement,
}

impl KeyUsageOption {
    /// The token's spelling in an OpenSSL-style request configuration.
    pub fn token(self) -> &'static str {
        match self {
            KeyUsageOption::DigitalSignature => "digitalSignature",
            KeyUsageOption::NonRepudiation => "nonRepudiation",
            KeyUsageOption::KeyEncipherment => "keyEncipherment",
            KeyUsageOption::DataEncipherment => "dataEncipherment",
            KeyUsageOption::KeyAgreement => "keyAgreement",
        }
    }
}

/// An extended-key-usage attribute token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendedKeyUsageOption {
    ClientAuth,
    EmailProtection,
}

impl ExtendedKeyUsageOption {
    /// The token's spelling in an OpenSSL-style request configuration.
    pub fn token(self) -> &'static str {
        match self {
            ExtendedKeyUsageOption::ClientAuth => "clientAuth",
            ExtendedKeyUsageOption::EmailProtection => "emailProtection",
        }
    }
}

/// A named certificate capability.
///
/// A client certificate bundles one or more purposes; each purpose
/// contributes its attribute tokens to the certificate's key-usage and
/// extended-key-usage extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Authentication,
    Encryption,
    Signature,
}

impl Purpose {
    /// The whole catalog, in its fixed scan order. Parsing resolves specifier
    /// characters against this order, first match winning.
    pub const ALL: [Purpose; 3] = [
        Purpose::Authentication,
        Purpose::Encryption,
        Purpose::Signature,
    ];

    /// The purpose's full identifier.
    pub fn name(self) -> &'static str {
        match self {
            Purpose::Authentication => "Authentication",
            Purpose::Encryption => "Encryption",
            Purpose::Signature => "Signature",
        }
    }

    /// The lowercase matching code. Defaults to the first four characters of
    /// [`Purpose::name`] lowercased; Encryption overrides with `"encrypt"` so
    /// the specifier forms read naturally.
    ///
    /// Codes start with distinct letters, so single-character specifiers are
    /// unambiguous.
    pub fn code(self) -> &'static str {
        match self {
            Purpose::Authentication => "auth",
            Purpose::Encryption => "encrypt",
            Purpose::Signature => "sign",
        }
    }

    /// The human-readable specifier form, used to build the documented
    /// default specifier.
    pub fn specifier_form(self) -> &'static str {
        match self {
            Purpose::Authentication => "Auth",
            Purpose::Encryption => "Encrypt",
            Purpose::Signature => "Sign",
        }
    }

    /// The default purposes specifier: every purpose's specifier form
    /// concatenated, e.g. `"AuthEncryptSign"` — one certificate carrying the
    /// whole catalog.
    pub fn default_specifier() -> String {
        Purpose::ALL.iter().map(|p| p.specifier_form()).collect()
    }

    /// Key-usage tokens this purpose requires, in declaration order.
    pub fn key_usages(self) -> &'static [KeyUsageOption] {
        match self {
            Purpose::Authentication => &[
                KeyUsageOption::KeyEncipherment,
                KeyUsageOption::KeyAgreement,
            ],
            Purpose::Encryption => &[KeyUsageOption::DataEncipherment],
            Purpose::Signature => &[
                KeyUsageOption::NonRepudiation,
                KeyUsageOption::DigitalSignature,
            ],
        }
    }

    /// Extended-key-usage tokens this purpose requires, in declaration order.
    pub fn extended_key_usages(self) -> &'static [ExtendedKeyUsageOption] {
        match self {
            Purpose::Authentication => &[ExtendedKeyUsageOption::ClientAuth],
            Purpose::Encryption => &[ExtendedKeyUsageOption::EmailProtection],
            Purpose::Signature => &[ExtendedKeyUsageOption::EmailProtection],
        }
    }
}

/// The merged usage attributes of one certificate's worth of purposes.
///
/// Both lists are deduplicated and insertion-ordered: iterating the group in
/// order, each token is appended the first time it is seen and skipped
/// afterwards. Purposes that share a token, like Encryption and Signature
/// both declaring `emailProtection`, therefore contribute it once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedUsage {
    pub key_usages: Vec<KeyUsageOption>,
    pub extended_key_usages: Vec<ExtendedKeyUsageOption>,
}

impl MergedUsage {
    /// Merges the usage attributes of every purpose in the group.
    ///
    /// Deterministic and order-preserving; merging the same group twice
    /// yields identical output.
    pub fn from_group(group: &[Purpose]) -> Self {
        let mut merged = MergedUsage::default();
        for purpose in group {
            for usage in purpose.key_usages() {
                if !merged.key_usages.contains(usage) {
                    merged.key_usages.push(*usage);
                }
            }
            for usage in purpose.extended_key_usages() {
                if !merged.extended_key_usages.contains(usage) {
                    merged.extended_key_usages.push(*usage);
                }
            }
        }
        merged
    }
}
