//! DER-encoded X.509 extension values derived from merged usages.
//!
//! A request configuration can be handed to an out-of-process signer as CNF
//! text, or to an in-process signer as encoded extension values. This module
//! covers the second form.

use const_oid::AssociatedOid;
use der::{
    Any, Encode,
    asn1::{Ia5String, Utf8StringRef},
    flagset::FlagSet,
    oid::ObjectIdentifier,
};
use x509_cert::ext::pkix::KeyUsage as X509KeyUsage;
use x509_cert::ext::pkix::KeyUsages;
use x509_cert::ext::pkix::name::{GeneralName, OtherName};

use crate::error::CertGroupError;
use crate::purpose::{ExtendedKeyUsageOption, KeyUsageOption, MergedUsage};

/// OID of the user-principal-name `otherName` form carried in the subject
/// alternative names.
pub const ID_USER_PRINCIPAL_NAME: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.311.20.2.3");

/// An X.509 extension ready for a certificate request.
///
/// # Fields
/// * `oid` - The object identifier of the extension.
/// * `critical` - Indicates if the extension is critical.
/// * `value` - The DER-encoded extension value.
#[derive(Clone, Debug)]
pub struct ExtensionParam {
    pub oid: ObjectIdentifier,
    pub critical: bool,
    pub value: Vec<u8>,
}

impl From<KeyUsageOption> for KeyUsages {
    fn from(value: KeyUsageOption) -> Self {
        match value {
            KeyUsageOption::DigitalSignature => KeyUsages::DigitalSignature,
            KeyUsageOption::NonRepudiation => KeyUsages::NonRepudiation,
            KeyUsageOption::KeyEncipherment => KeyUsages::KeyEncipherment,
            KeyUsageOption::DataEncipherment => KeyUsages::DataEncipherment,
            KeyUsageOption::KeyAgreement => KeyUsages::KeyAgreement,
        }
    }
}

impl From<ExtendedKeyUsageOption> for ObjectIdentifier {
    fn from(value: ExtendedKeyUsageOption) -> Self {
        match value {
            ExtendedKeyUsageOption::ClientAuth => const_oid::db::rfc5912::ID_KP_CLIENT_AUTH,
            ExtendedKeyUsageOption::EmailProtection => {
                const_oid::db::rfc5912::ID_KP_EMAIL_PROTECTION
            }
        }
    }
}

impl MergedUsage {
    /// Encodes the merged key usages as a keyUsage extension.
    ///
    /// # Returns
    /// `None` when the merged list is empty; an empty extension is omitted,
    /// not emitted.
    pub fn key_usage_param(&self) -> Result<Option<ExtensionParam>, CertGroupError> {
        if self.key_usages.is_empty() {
            return Ok(None);
        }
        let flags = self
            .key_usages
            .iter()
            .fold(FlagSet::default(), |flags, usage| {
                flags | KeyUsages::from(*usage)
            });
        Ok(Some(ExtensionParam {
            oid: <X509KeyUsage as AssociatedOid>::OID,
            critical: false,
            value: X509KeyUsage(flags).to_der()?,
        }))
    }

    /// Encodes the merged extended key usages as an extendedKeyUsage
    /// extension, or `None` when the merged list is empty.
    pub fn extended_key_usage_param(&self) -> Result<Option<ExtensionParam>, CertGroupError> {
        if self.extended_key_usages.is_empty() {
            return Ok(None);
        }
        let oids: Vec<ObjectIdentifier> = self
            .extended_key_usages
            .iter()
            .map(|usage| (*usage).into())
            .collect();
        let eku = x509_cert::ext::pkix::ExtendedKeyUsage(oids);
        Ok(Some(ExtensionParam {
            oid: x509_cert::ext::pkix::ExtendedKeyUsage::OID,
            critical: false,
            value: eku.to_der()?,
        }))
    }
}

/// Encodes the subject alternative names for a client email: the
/// user-principal-name `otherName` form and the rfc822 email form.
pub fn subject_alt_name_param(email: &str) -> Result<ExtensionParam, CertGroupError> {
    let principal_name = OtherName {
        type_id: ID_USER_PRINCIPAL_NAME,
        value: Any::encode_from(&Utf8StringRef::new(email)?)?,
    };
    let rfc822_name = Ia5String::try_from(email.to_string())
        .map_err(|e| CertGroupError::InvalidInput(e.to_string()))?;

    let san = x509_cert::ext::pkix::SubjectAltName(vec![
        GeneralName::OtherName(principal_name),
        GeneralName::Rfc822Name(rfc822_name),
    ]);

    Ok(ExtensionParam {
        oid: x509_cert::ext::pkix::SubjectAltName::OID,
        critical: false,
        value: san.to_der()?,
    })
}

#[cfg(test)]
mod tests {
    use der::Decode;

    use super::*;
    use crate::purpose::Purpose;

    #[test]
    fn key_usage_value_decodes_to_the_merged_flags() {
        let merged = MergedUsage::from_group(&[Purpose::Signature]);
        let param = merged.key_usage_param().unwrap().unwrap();
        let decoded = X509KeyUsage::from_der(&param.value).unwrap();
        assert_eq!(
            decoded.0,
            KeyUsages::NonRepudiation | KeyUsages::DigitalSignature
        );
    }

    #[test]
    fn empty_merged_usage_encodes_no_params() {
        let merged = MergedUsage::default();
        assert!(merged.key_usage_param().unwrap().is_none());
        assert!(merged.extended_key_usage_param().unwrap().is_none());
    }

    #[test]
    fn extended_key_usage_value_decodes_to_the_merged_oids() {
        let merged = MergedUsage::from_group(&[Purpose::Authentication, Purpose::Encryption]);
        let param = merged.extended_key_usage_param().unwrap().unwrap();
        let decoded = x509_cert::ext::pkix::ExtendedKeyUsage::from_der(&param.value).unwrap();
        assert_eq!(
            decoded.0,
            vec![
                const_oid::db::rfc5912::ID_KP_CLIENT_AUTH,
                const_oid::db::rfc5912::ID_KP_EMAIL_PROTECTION,
            ]
        );
    }

    #[test]
    fn subject_alt_name_carries_principal_and_email_forms() {
        let param = subject_alt_name_param("alice@example.com").unwrap();
        let san = x509_cert::ext::pkix::SubjectAltName::from_der(&param.value).unwrap();
        assert_eq!(san.0.len(), 2);
        match &san.0[0] {
            GeneralName::OtherName(other) => {
                assert_eq!(other.type_id, ID_USER_PRINCIPAL_NAME);
            }
            other => panic!("expected otherName, got {other:?}"),
        }
        match &san.0[1] {
            GeneralName::Rfc822Name(name) => assert_eq!(name.to_string(), "alice@example.com"),
            other => panic!("expected rfc822Name, got {other:?}"),
        }
    }
}
