//! Types describing the exchange-rate tables published by the NBP.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Average rate of one foreign currency, quoted in PLN.
///
/// The endpoint answers with an array of tables, each carrying a `rates` list
/// of these next to its `table`, `no` and `effectiveDate` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    /// Full name, e.g. "dolar amerykański".
    pub currency: String,
    /// ISO 4217 code, e.g. "USD".
    pub code: String,
    /// Mid-market rate.
    pub mid: f64,
}

/// Extracts the rates among the first `limit` entries of the first table of a
/// response body, preserving their order.
///
/// The body is inspected leniently: an empty array, a first element without
/// a `rates` list, or any other unexpected shape yields an empty list.
/// Entries within the first `limit` that do not look like a [`CurrencyRate`]
/// are skipped and never replaced by later ones.
pub fn first_table_rates(body: &Value, limit: usize) -> Vec<CurrencyRate> {
    let Some(rates) = body
        .as_array()
        .and_then(|tables| tables.first())
        .and_then(|table| table.get("rates"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    rates
        .iter()
        .take(limit)
        .filter_map(|rate| CurrencyRate::deserialize(rate).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rate(code: &str, mid: f64) -> Value {
        json!({ "currency": format!("currency {code}"), "code": code, "mid": mid })
    }

    fn response(rates: Vec<Value>) -> Value {
        json!([{ "table": "A", "no": "001/A/NBP/2025", "effectiveDate": "2025-01-01", "rates": rates }])
    }

    #[test]
    fn keeps_first_ten_in_order() {
        let codes: Vec<String> = (0..14).map(|i| format!("C{i:02}")).collect();
        let body = response(codes.iter().map(|c| rate(c, 1.0)).collect());

        let rates = first_table_rates(&body, 10);
        let got: Vec<&str> = rates.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(got, codes[..10].iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn keeps_all_when_fewer_than_limit() {
        let body = response(vec![rate("USD", 4.0234), rate("EUR", 4.5678)]);
        let rates = first_table_rates(&body, 10);
        assert_eq!(
            rates,
            vec![
                CurrencyRate { currency: "currency USD".into(), code: "USD".into(), mid: 4.0234 },
                CurrencyRate { currency: "currency EUR".into(), code: "EUR".into(), mid: 4.5678 },
            ]
        );
    }

    #[test]
    fn unexpected_shapes_give_empty_list() {
        for body in [json!([]), json!({}), json!([{ "table": "A" }]), json!([{ "rates": "nope" }]), json!(null)] {
            assert!(first_table_rates(&body, 10).is_empty(), "{body}");
        }
    }

    #[test]
    fn malformed_entry_does_not_pull_in_the_eleventh() {
        let mut rates = vec![json!({ "code": "BAD" })];
        rates.extend((1..=11).map(|i| rate(&format!("C{i:02}"), 1.0)));
        let body = response(rates);

        let kept: Vec<String> = first_table_rates(&body, 10).into_iter().map(|r| r.code).collect();
        let expected: Vec<String> = (1..=9).map(|i| format!("C{i:02}")).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn only_the_first_table_is_used() {
        let body = json!([{ "rates": [rate("USD", 4.0)] }, { "rates": [rate("EUR", 4.5)] }]);
        let rates = first_table_rates(&body, 10);
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].code, "USD");
    }
}
