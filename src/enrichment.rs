/// Identification lookup handler for the contact form
///
/// This module implements the enrichment flow triggered when the identity
/// number or the identification type of a contact changes:
/// 1. Check preconditions (number + type present, config complete)
/// 2. Mirror the identification type for the LATAM localization layer
/// 3. Query the lookup API for the RUC or DNI
/// 4. Map the response onto the contact's name and address fields
use crate::config::ApiPeruConfig;
use crate::directory::ReferenceDirectory;
use crate::errors::LookupError;
use crate::models::{AddressRecord, LookupKind, Partner, COUNTRY_CODE_PERU};
use crate::services::ApiPeruService;

/// What the handler did with the current contact state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentOutcome {
    /// Identity number or identification type missing; nothing was done.
    Skipped,
    /// Lookup succeeded and the contact fields were populated.
    Applied,
}

/// Capitalize a name the way the lookup API expects reference names to be
/// stored: first character uppercased, the rest lowercased.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Enrich a contact from its identity number.
///
/// Invoked by the host whenever `vat` or `identification_type` changes.
/// Mutates only the passed contact; fields written before a failure point
/// (the mirrored identification type) are left in place.
///
/// # Arguments
///
/// * `partner` - The contact being edited.
/// * `config` - The owning organization's API configuration.
/// * `directory` - The host's geography reference tables.
///
/// # Returns
///
/// * `Ok(EnrichmentOutcome::Skipped)` when preconditions leave nothing to do.
/// * `Ok(EnrichmentOutcome::Applied)` after a successful lookup and mapping.
/// * `Err(LookupError)` on any configuration, network, decode, or lookup
///   failure.
pub async fn enrich_from_identification(
    partner: &mut Partner,
    config: &ApiPeruConfig,
    directory: &dyn ReferenceDirectory,
) -> Result<EnrichmentOutcome, LookupError> {
    let (vat, id_type) = match (&partner.vat, &partner.identification_type) {
        (Some(vat), Some(id_type)) if !vat.is_empty() => (vat.clone(), id_type.clone()),
        _ => return Ok(EnrichmentOutcome::Skipped),
    };

    // The localization mirror is set before anything can fail and survives
    // later errors.
    partner.l10n_latam_identification_type = Some(id_type.clone());

    config.ensure_ready()?;

    let kind = LookupKind::from_type_name(&id_type.name)
        .ok_or_else(|| LookupError::UnsupportedIdentificationType(id_type.name.clone()))?;

    let service = ApiPeruService::new(config)?;

    match kind {
        LookupKind::Ruc => {
            let record = service.lookup_ruc(&vat).await?;
            partner.name = record.nombre_o_razon_social.unwrap_or_default();
            partner.is_company = true;
            apply_address(partner, &record.address, directory);
        }
        LookupKind::Dni => {
            let record = service.lookup_dni(&vat).await?;
            partner.name = record.nombre_completo.unwrap_or_default();
            apply_address(partner, &record.address, directory);
        }
    }

    tracing::info!("Contact enriched from {} lookup", kind);
    Ok(EnrichmentOutcome::Applied)
}

/// Map the address block of a lookup response onto the contact.
///
/// State and district are resolved against the reference directory by exact
/// name; an unmatched name leaves the field unchanged without raising.
fn apply_address(partner: &mut Partner, address: &AddressRecord, directory: &dyn ReferenceDirectory) {
    partner.country_code = Some(COUNTRY_CODE_PERU.to_string());

    if let Some(department) = address.departamento.as_deref().filter(|s| !s.is_empty()) {
        let state_name = format!("{} (PE)", capitalize(department));
        match directory.state_by_name(COUNTRY_CODE_PERU, &state_name) {
            Some(state) => partner.state = Some(state),
            None => tracing::warn!("No state record matches '{}'", state_name),
        }
    }

    if let Some(province) = address.provincia.as_deref().filter(|s| !s.is_empty()) {
        partner.city = Some(capitalize(province));
    }

    if let Some(district) = address.distrito.as_deref().filter(|s| !s.is_empty()) {
        let district_name = capitalize(district);
        match directory.district_by_name(&district_name) {
            Some(district) => partner.district = Some(district),
            None => tracing::warn!("No district record matches '{}'", district_name),
        }
    }

    partner.street = Some(address.direccion.clone().unwrap_or_default());
    partner.zip = Some(address.ubigeo_sunat.clone().unwrap_or_default());
}
