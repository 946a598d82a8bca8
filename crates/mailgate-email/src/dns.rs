//! DNS record reshaping for SendGrid domain responses

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::errors::GatewayError;

/// TTL synthesized for every record; SendGrid does not supply one.
pub const DEFAULT_TTL: u32 = 120;

/// DNS record the caller must add to their domain's zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DnsRecord {
    /// Record type: CNAME, TXT, MX
    #[serde(rename = "type")]
    #[schema(example = "cname")]
    pub record_type: String,
    /// DNS record name (host)
    #[schema(example = "em1.example.com")]
    pub name: String,
    /// DNS record value
    #[schema(example = "u1.sendgrid.net")]
    pub content: String,
    #[schema(example = 120)]
    pub ttl: u32,
}

/// Flatten the `dns` object of a SendGrid domain response into records.
///
/// One record per entry, mapping `type`/`host`/`data` onto
/// `type`/`name`/`content`. A missing or non-object `dns` key yields an empty
/// list; an entry lacking any of the three fields is an invalid response.
/// Entry order follows the provider map's iteration order, which SendGrid
/// does not guarantee.
pub fn extract_dns_records(domain_info: &Value) -> Result<Vec<DnsRecord>, GatewayError> {
    let dns = match domain_info.get("dns").and_then(Value::as_object) {
        Some(dns) => dns,
        None => return Ok(Vec::new()),
    };

    dns.iter()
        .map(|(entry, record)| {
            Ok(DnsRecord {
                record_type: string_field(entry, record, "type")?,
                name: string_field(entry, record, "host")?,
                content: string_field(entry, record, "data")?,
                ttl: DEFAULT_TTL,
            })
        })
        .collect()
}

fn string_field(entry: &str, record: &Value, key: &str) -> Result<String, GatewayError> {
    match record.get(key).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(GatewayError::InvalidResponse(format!(
            "DNS entry {} is missing {}",
            entry, key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_type_host_data_onto_record_fields() {
        let domain_info = json!({
            "id": 1,
            "dns": {
                "mail_cname": {
                    "type": "cname",
                    "host": "em1.example.com",
                    "data": "u1.sendgrid.net"
                }
            }
        });

        let records = extract_dns_records(&domain_info).unwrap();
        assert_eq!(
            records,
            vec![DnsRecord {
                record_type: "cname".to_string(),
                name: "em1.example.com".to_string(),
                content: "u1.sendgrid.net".to_string(),
                ttl: 120,
            }]
        );
    }

    #[test]
    fn one_record_per_dns_entry_with_fixed_ttl() {
        let domain_info = json!({
            "id": 42,
            "dns": {
                "mail_cname": {"type": "cname", "host": "em1.example.com", "data": "u1.sendgrid.net"},
                "dkim1": {"type": "cname", "host": "s1._domainkey.example.com", "data": "s1.domainkey.u1.sendgrid.net"},
                "dkim2": {"type": "cname", "host": "s2._domainkey.example.com", "data": "s2.domainkey.u1.sendgrid.net"}
            }
        });

        let records = extract_dns_records(&domain_info).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.ttl == DEFAULT_TTL));

        // Provider map iteration order is not contractual, compare as a set.
        let mut names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "em1.example.com",
                "s1._domainkey.example.com",
                "s2._domainkey.example.com"
            ]
        );
    }

    #[test]
    fn missing_dns_key_yields_empty_list() {
        assert!(extract_dns_records(&json!({"id": 1})).unwrap().is_empty());
        assert!(extract_dns_records(&json!({"id": 1, "dns": {}}))
            .unwrap()
            .is_empty());
        assert!(extract_dns_records(&json!({"id": 1, "dns": "oops"}))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn entry_missing_a_field_is_an_invalid_response() {
        // No hollow records: an entry without type/host/data is rejected
        // instead of defaulting to empty strings.
        let domain_info = json!({
            "id": 1,
            "dns": {
                "mail_cname": {"host": "em1.example.com"}
            }
        });

        let err = extract_dns_records(&domain_info).unwrap_err();
        match err {
            GatewayError::InvalidResponse(msg) => {
                assert!(msg.contains("mail_cname"));
                assert!(msg.contains("type"));
            }
            other => panic!("expected InvalidResponse, got {:?}", other),
        }
    }

    #[test]
    fn entry_with_empty_field_is_an_invalid_response() {
        let domain_info = json!({
            "id": 1,
            "dns": {
                "mail_cname": {"type": "cname", "host": "", "data": "u1.sendgrid.net"}
            }
        });

        assert!(matches!(
            extract_dns_records(&domain_info).unwrap_err(),
            GatewayError::InvalidResponse(_)
        ));
    }

    #[test]
    fn serializes_with_type_key() {
        let record = DnsRecord {
            record_type: "txt".to_string(),
            name: "example.com".to_string(),
            content: "v=spf1 include:sendgrid.net ~all".to_string(),
            ttl: DEFAULT_TTL,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "txt");
        assert_eq!(value["ttl"], 120);
        assert!(value.get("record_type").is_none());
    }
}
