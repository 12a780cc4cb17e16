//! # certgroup - Certificate Purpose Grouping and Request Configuration
//!
//! certgroup turns a compact purposes specifier into X.509 certificate
//! request configurations for named clients. Requested certificate purposes
//! (Authentication, Encryption, Signature) are grouped into one or more
//! certificates per client, each group's key-usage attributes are merged,
//! and a request configuration is composed per group for a signing
//! collaborator to consume.
//!
//! ## The specifier grammar
//!
//! A specifier is comma-delimited, one group per certificate, and accepts a
//! dual shorthand:
//!
//! - `"AuthEncryptSign"`, the default: one certificate with the purposes
//!   Authentication, Encryption, and Signature.
//! - `"aes"`: the all-lowercase short form of the same thing.
//! - `"Auth,EncryptSign"`: two certificates, the first with Authentication,
//!   the second with Encryption and Signature.
//! - `"a,es"`: the short form of `"Auth,EncryptSign"`.
//!
//! Parsing never aborts on bad input. Every group comes back with a
//! diagnostic classification, and an aggregate `ok` flag tells the caller
//! whether to proceed.
//!
//! ## Quick Start
//!
//! ### Parsing a specifier
//!
//! ```rust
//! use certgroup::purpose::Purpose;
//! use certgroup::specifier::parse_purposes;
//!
//! let parsed = parse_purposes("a,es");
//! assert!(parsed.ok);
//! assert_eq!(parsed.certificates.len(), 2);
//! for report in &parsed.reports {
//!     println!("{report}");
//! }
//! assert_eq!(parsed.certificates[0], vec![Purpose::Authentication]);
//! ```
//!
//! ### Composing request configurations
//!
//! ```rust
//! use certgroup::config::ConfigPayload;
//! use certgroup::config::params::{ClientIdentity, DistinguishedName};
//! use certgroup::purpose::Purpose;
//! use certgroup::specifier::parse_purposes;
//!
//! # fn main() -> Result<(), certgroup::error::CertGroupError> {
//! let identity = ClientIdentity::builder()
//!     .client_name("alice".to_string())
//!     .email("alice@example.com".to_string())
//!     .build();
//!
//! let distinguished_name = DistinguishedName::builder()
//!     .country("UK".to_string())
//!     .state("Example State".to_string())
//!     .locality("Example Locality".to_string())
//!     .organization("Example Organisation".to_string())
//!     .organization_unit("Example Unit".to_string())
//!     .build();
//!
//! let parsed = parse_purposes(&Purpose::default_specifier());
//! assert!(parsed.ok);
//!
//! for group in &parsed.certificates {
//!     let payload = ConfigPayload::compose(&identity, group, &distinguished_name)?;
//!     // Hand to the openssl collaborator as CNF text, written under
//!     // the payload's file stem.
//!     println!("{}.cnf:\n{}", payload.file_stem, payload.to_cnf());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Merged usages and encoded extensions
//!
//! ```rust
//! use certgroup::purpose::{MergedUsage, Purpose};
//!
//! # fn main() -> Result<(), certgroup::error::CertGroupError> {
//! let merged = MergedUsage::from_group(&[Purpose::Encryption, Purpose::Signature]);
//! let tokens: Vec<&str> = merged.key_usages.iter().map(|u| u.token()).collect();
//! assert_eq!(tokens, ["dataEncipherment", "nonRepudiation", "digitalSignature"]);
//!
//! // For an in-process signer, the same merge encodes as DER extension
//! // values.
//! let key_usage = merged.key_usage_param()?.unwrap();
//! assert!(!key_usage.value.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Specifier problems are diagnostics, not errors: a repeated purpose letter,
//! a duplicate group, an empty group, or a partially-matched group each
//! classify the offending group in its [`specifier::ParseReport`] while the
//! full group list is still returned. [`error::CertGroupError`] covers the
//! genuinely fallible edges, like an over-long country code or a DER
//! encoding failure.
//!
//! ## Module Organization
//!
//! - [`purpose`]: The purpose catalog and usage merging.
//! - [`specifier`]: Specifier normalization and parsing.
//! - [`config`]: Request configuration composition and rendering.
//! - [`error`]: Error types.

pub mod config;
pub mod error;
pub mod purpose;
pub mod specifier;
