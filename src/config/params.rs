use bon::Builder;

use crate::error::CertGroupError;

/// Identity of the client a certificate set is generated for.
///
/// # Fields
/// * `client_name` - The client's short name, used as the base of generated
///   file names.
/// * `email` - The client's email address, used as the certificate common
///   name and in its subject alternative names.
#[derive(Clone, Debug, Builder)]
pub struct ClientIdentity {
    pub client_name: String,
    pub email: String,
}

/// Distinguished-name fields shared by every certificate request.
///
/// Immutable once built; construct with the generated builder and pass by
/// reference into the composer.
///
/// # Fields
/// * `country` - The country code (C), at most two characters.
/// * `state` - The state or province (ST).
/// * `locality` - The locality or city (L).
/// * `organization` - The organization (O).
/// * `organization_unit` - The organizational unit (OU).
#[derive(Clone, Debug, Builder, Default)]
pub struct DistinguishedName {
    pub country: String,
    pub state: String,
    pub locality: String,
    pub organization: String,
    pub organization_unit: String,
}

impl DistinguishedName {
    /// Checks the field constraints.
    ///
    /// # Errors
    /// Returns [`CertGroupError::InvalidInput`] if the country code is longer
    /// than two characters.
    pub fn validate(&self) -> Result<(), CertGroupError> {
        let length = self.country.chars().count();
        if length > 2 {
            return Err(CertGroupError::InvalidInput(format!(
                "Country code \"{}\" too long. Length:{}. Maximum length: 2.",
                self.country, length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_character_country_code_validates() {
        let dn = DistinguishedName::builder()
            .country("UK".to_string())
            .state("Example State".to_string())
            .locality("Example Locality".to_string())
            .organization("Example Organisation".to_string())
            .organization_unit("Example Unit".to_string())
            .build();
        assert!(dn.validate().is_ok());
    }

    #[test]
    fn three_character_country_code_is_rejected() {
        let dn = DistinguishedName::builder()
            .country("GBR".to_string())
            .state(String::new())
            .locality(String::new())
            .organization(String::new())
            .organization_unit(String::new())
            .build();
        assert!(matches!(
            dn.validate(),
            Err(CertGroupError::InvalidInput(_))
        ));
    }
}
