//! Certificate request configuration composition.
//!
//! One [`ConfigPayload`] is composed per certificate group. It carries
//! everything the signing collaborator needs: the client identity, the file
//! stem to write under, the merged usage attributes, and the
//! distinguished-name fields. The payload renders either as OpenSSL request
//! configuration text ([`ConfigPayload::to_cnf`]) or as DER-encoded
//! extension values ([`ConfigPayload::to_extension_params`]).

pub mod extensions;
pub mod params;

use crate::error::CertGroupError;
pub type Result<T> = std::result::Result<T, CertGroupError>;

use crate::purpose::{MergedUsage, Purpose};
use extensions::{ExtensionParam, subject_alt_name_param};
use params::{ClientIdentity, DistinguishedName};

/// The file-name suffix for a certificate group: per purpose in group order,
/// an underscore plus the first four characters of the purpose name, e.g.
/// `"_Encr_Sign"`.
pub fn suffix(group: &[Purpose]) -> String {
    group
        .iter()
        .map(|purpose| format!("_{}", &purpose.name()[..4]))
        .collect()
}

/// The file stem for one of a client's certificates.
///
/// The default grouping is the whole catalog in one certificate; that group
/// gets the bare client name. Every other group gets the client name plus
/// its [`suffix`], so a multi-certificate client's files stay distinct.
pub fn file_stem(client_name: &str, group: &[Purpose]) -> String {
    let group_suffix = suffix(group);
    if group_suffix == suffix(&Purpose::ALL) {
        client_name.to_string()
    } else {
        format!("{client_name}{group_suffix}")
    }
}

/// A certificate request configuration for one certificate group.
#[derive(Clone, Debug)]
pub struct ConfigPayload {
    pub client_name: String,
    pub email: String,
    /// File stem for the request's generated files, per [`file_stem`].
    pub file_stem: String,
    /// The group's purposes, in specifier order.
    pub purposes: Vec<Purpose>,
    /// Merged usage attributes of the group.
    pub merged: MergedUsage,
    pub distinguished_name: DistinguishedName,
}

impl ConfigPayload {
    /// Composes the request configuration for one certificate group.
    ///
    /// # Errors
    /// Returns [`CertGroupError::InvalidInput`] if the distinguished name
    /// fails validation.
    pub fn compose(
        identity: &ClientIdentity,
        group: &[Purpose],
        distinguished_name: &DistinguishedName,
    ) -> Result<Self> {
        distinguished_name.validate()?;
        Ok(ConfigPayload {
            client_name: identity.client_name.clone(),
            email: identity.email.clone(),
            file_stem: file_stem(&identity.client_name, group),
            purposes: group.to_vec(),
            merged: MergedUsage::from_group(group),
            distinguished_name: distinguished_name.clone(),
        })
    }

    /// Renders the configuration as OpenSSL request configuration text.
    ///
    /// The subject alternative names carry the email in user-principal-name
    /// and rfc822 forms; `#` is escaped in the email. The `keyUsage` and
    /// `extendedKeyUsage` clauses are omitted entirely when the merged list
    /// is empty, never emitted as an empty clause.
    pub fn to_cnf(&self) -> String {
        let email = self.email.replace('#', "\\#");

        let key_usages = if self.merged.key_usages.is_empty() {
            String::new()
        } else {
            let tokens: Vec<&str> = self
                .merged
                .key_usages
                .iter()
                .map(|usage| usage.token())
                .collect();
            format!("keyUsage = {}\n", tokens.join(", "))
        };
        let extended_key_usages = if self.merged.extended_key_usages.is_empty() {
            String::new()
        } else {
            let tokens: Vec<&str> = self
                .merged
                .extended_key_usages
                .iter()
                .map(|usage| usage.token())
                .collect();
            format!("extendedKeyUsage = {}\n", tokens.join(", "))
        };

        let dn = &self.distinguished_name;
        format!(
            "# Written by certgroup.\n\
            basicConstraints = CA:FALSE\n\
            subjectKeyIdentifier = hash\n\
            authorityKeyIdentifier = keyid,issuer\n\
            subjectAltName = @alt_names\n\
            {key_usages}{extended_key_usages}\n\
            [alt_names]\n\
            otherName = {upn_oid};UTF8:{email}\n\
            email = {email}\n\
            \n\
            [req]\n\
            prompt = no\n\
            distinguished_name = distinguished_names\n\
            req_extensions = req_extensions\n\
            \n\
            [req_extensions]\n\
            subjectAltName = @alt_names\n\
            {key_usages}{extended_key_usages}\n\
            [distinguished_names]\n\
            commonName = {email}\n\
            countryName = {country}\n\
            stateOrProvinceName = {state}\n\
            localityName = {locality}\n\
            emailAddress = {email}\n\
            organizationName = {organization}\n\
            organizationalUnitName = {organization_unit}\n",
            upn_oid = extensions::ID_USER_PRINCIPAL_NAME,
            country = dn.country,
            state = dn.state,
            locality = dn.locality,
            organization = dn.organization,
            organization_unit = dn.organization_unit,
        )
    }

    /// Encodes the configuration's extensions as DER values for an
    /// in-process signer: subject alternative names always, key usage and
    /// extended key usage when non-empty.
    pub fn to_extension_params(&self) -> Result<Vec<ExtensionParam>> {
        let mut extension_params = vec![subject_alt_name_param(&self.email)?];
        if let Some(param) = self.merged.key_usage_param()? {
            extension_params.push(param);
        }
        if let Some(param) = self.merged.extended_key_usage_param()? {
            extension_params.push(param);
        }
        Ok(extension_params)
    }
}
