/// Unit tests for the lookup building blocks
/// Tests capitalization, kind dispatch, config checks, and wire decoding
use apiperu_lookup::config::ApiPeruConfig;
use apiperu_lookup::enrichment::capitalize;
use apiperu_lookup::models::{DniRecord, LookupEnvelope, LookupKind, RucRecord};

#[cfg(test)]
mod capitalize_tests {
    use super::*;

    #[test]
    fn test_lowercase_input() {
        assert_eq!(capitalize("lima"), "Lima");
    }

    #[test]
    fn test_uppercase_input() {
        assert_eq!(capitalize("LIMA"), "Lima");
    }

    #[test]
    fn test_multi_word_lowercases_the_rest() {
        // Only the first character of the whole string is uppercased
        assert_eq!(capitalize("Magdalena del Mar"), "Magdalena del mar");
        assert_eq!(capitalize("SAN JUAN DE LURIGANCHO"), "San juan de lurigancho");
    }

    #[test]
    fn test_accented_characters() {
        assert_eq!(capitalize("áncash"), "Áncash");
        assert_eq!(capitalize("JUNÍN"), "Junín");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_already_capitalized_is_unchanged() {
        assert_eq!(capitalize("Lima"), "Lima");
    }
}

#[cfg(test)]
mod lookup_kind_tests {
    use super::*;

    #[test]
    fn test_recognized_type_names() {
        assert_eq!(LookupKind::from_type_name("DNI"), Some(LookupKind::Dni));
        assert_eq!(LookupKind::from_type_name("RUC"), Some(LookupKind::Ruc));
    }

    #[test]
    fn test_unrecognized_type_names() {
        assert_eq!(LookupKind::from_type_name("CE"), None);
        assert_eq!(LookupKind::from_type_name("Pasaporte"), None);
        assert_eq!(LookupKind::from_type_name(""), None);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert_eq!(LookupKind::from_type_name("dni"), None);
        assert_eq!(LookupKind::from_type_name("Ruc"), None);
        assert_eq!(LookupKind::from_type_name("ruc "), None);
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(LookupKind::Dni.endpoint_path(), "api/dni");
        assert_eq!(LookupKind::Ruc.endpoint_path(), "api/ruc");
    }

    #[test]
    fn test_request_bodies() {
        assert_eq!(
            LookupKind::Dni.request_body("12345678"),
            serde_json::json!({ "dni": "12345678" })
        );
        assert_eq!(
            LookupKind::Ruc.request_body("20100443688"),
            serde_json::json!({ "ruc": "20100443688" })
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(LookupKind::Dni.to_string(), "DNI");
        assert_eq!(LookupKind::Ruc.to_string(), "RUC");
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_complete_config_is_ready() {
        let config = ApiPeruConfig::new("https://apiperu.dev", "secret");
        assert!(config.ensure_ready().is_ok());
    }

    #[test]
    fn test_missing_values_are_rejected() {
        assert!(ApiPeruConfig::new("", "secret").ensure_ready().is_err());
        assert!(ApiPeruConfig::new("https://apiperu.dev", "")
            .ensure_ready()
            .is_err());
        // Whitespace-only values count as missing
        assert!(ApiPeruConfig::new("https://apiperu.dev", "   ")
            .ensure_ready()
            .is_err());
    }
}

#[cfg(test)]
mod wire_decoding_tests {
    use super::*;

    #[test]
    fn test_ruc_record_full_payload() {
        let envelope: LookupEnvelope<RucRecord> = serde_json::from_str(
            r#"{
                "success": true,
                "data": {
                    "nombre_o_razon_social": "EMPRESA DEMO",
                    "direccion": "JR. ANDAHUAYLAS NRO. 100",
                    "departamento": "Lima",
                    "provincia": "Lima",
                    "distrito": "Magdalena del Mar",
                    "ubigeo_sunat": "150101",
                    "estado": "ACTIVO"
                }
            }"#,
        )
        .unwrap();

        assert!(envelope.success);
        let record = envelope.data.unwrap();
        assert_eq!(record.nombre_o_razon_social.as_deref(), Some("EMPRESA DEMO"));
        assert_eq!(record.address.ubigeo_sunat.as_deref(), Some("150101"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let envelope: LookupEnvelope<DniRecord> = serde_json::from_str(
            r#"{
                "success": true,
                "data": {
                    "numero": "12345678",
                    "nombre_completo": "JUAN PEREZ",
                    "codigo_verificacion": 3
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            envelope.data.unwrap().nombre_completo.as_deref(),
            Some("JUAN PEREZ")
        );
    }

    #[test]
    fn test_missing_success_counts_as_failure() {
        let envelope: LookupEnvelope<RucRecord> =
            serde_json::from_str(r#"{ "data": {} }"#).unwrap();
        assert!(!envelope.success);
    }

    #[test]
    fn test_missing_data_decodes_to_none() {
        let envelope: LookupEnvelope<RucRecord> =
            serde_json::from_str(r#"{ "success": true }"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_absent_keys_default_to_none() {
        let record: RucRecord = serde_json::from_str("{}").unwrap();
        assert!(record.nombre_o_razon_social.is_none());
        assert!(record.address.direccion.is_none());
        assert!(record.address.departamento.is_none());
    }
}
