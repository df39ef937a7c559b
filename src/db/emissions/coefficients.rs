use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("{0}")]
pub struct ParseError(pub String);

/// The two identifiers derived from a coefficient key of the form
/// `<prefix>_<skuId>_<region>`.  The first segment is bookkeeping in the
/// source file and is discarded.
#[derive(Debug, PartialEq)]
pub struct CoefficientKey {
    pub sku_id: String,
    pub region: String,
}

impl FromStr for CoefficientKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('_').collect();
        if parts.len() < 3 {
            return Err(ParseError(format!(
                "Failed parsing {} as a coefficient key",
                s
            )));
        }
        Ok(CoefficientKey {
            sku_id: parts[1].to_string(),
            region: parts[2].to_string(),
        })
    }
}

/// Parse the coefficients document into (key, coefficient) pairs, in the
/// order the keys appear in the file.  Updates are applied in this order, so
/// a later duplicate wins.
pub fn parse_coefficients(buffer: &str) -> Result<Vec<(String, f64)>, ParseError> {
    let doc: Value = serde_json::from_str(buffer)
        .map_err(|e| ParseError(format!("coefficients file is not valid json: {}", e)))?;
    let map = match doc {
        Value::Object(map) => map,
        _ => return Err(ParseError("coefficients file is not a json object".to_string())),
    };

    let mut pairs: Vec<(String, f64)> = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value.as_f64() {
            Some(coefficient) => pairs.push((key, coefficient)),
            None => {
                return Err(ParseError(format!("value for key {} is not a number", key)))
            }
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn parse_key() -> Result<(), Box<dyn Error>> {
        let key = "E_SKU100_US".parse::<CoefficientKey>()?;
        assert_eq!(key.sku_id, "SKU100");
        assert_eq!(key.region, "US");
        Ok(())
    }

    #[test]
    fn parse_key_extra_segments() -> Result<(), Box<dyn Error>> {
        // segments past the third are ignored
        let key = "E_SKU100_us-east-1_v2".parse::<CoefficientKey>()?;
        assert_eq!(key.sku_id, "SKU100");
        assert_eq!(key.region, "us-east-1");
        Ok(())
    }

    #[test]
    fn parse_key_too_few_segments() {
        assert!("onlyoneseg_sku".parse::<CoefficientKey>().is_err());
        assert!("".parse::<CoefficientKey>().is_err());
    }

    #[test]
    fn parse_file_order() -> Result<(), Box<dyn Error>> {
        let buffer = r#"{"E_SKU200_EU": 0.5, "E_SKU100_US": 1.25}"#;
        let pairs = parse_coefficients(buffer)?;
        assert_eq!(
            pairs,
            vec![
                ("E_SKU200_EU".to_string(), 0.5),
                ("E_SKU100_US".to_string(), 1.25)
            ]
        );
        Ok(())
    }

    #[test]
    fn parse_file_rejects_non_numbers() {
        let buffer = r#"{"E_SKU100_US": "1.25"}"#;
        assert!(parse_coefficients(buffer).is_err());
    }

    #[test]
    fn parse_file_rejects_non_object() {
        assert!(parse_coefficients("[1, 2, 3]").is_err());
        assert!(parse_coefficients("not json").is_err());
    }
}
