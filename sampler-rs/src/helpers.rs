use serde_json::Value;

use crate::constants::{BUFFER, BUFFERS, MEASURING, NAME, N_ROW_VALUES, STATUS};
use crate::errors::SamplerError;

/// Query asking phyphox for the latest value of every variable: `accX&accY&...`
pub(crate) fn build_query(variables: &[&str]) -> String {
    variables.join("&")
}

pub(crate) fn get_status_from_json(data: &Value) -> Result<bool, SamplerError> {
    data[STATUS][MEASURING]
        .as_bool()
        .ok_or(SamplerError::IncorrectDataFormat(
            "Missing status.measuring".to_string(),
        ))
}

/// Returns the last value of each requested buffer, in the order of `variables`.
/// `Ok(None)` if any buffer is still empty.
pub(crate) fn parse_latest(
    data: &Value,
    variables: &[&str],
) -> Result<Option<[f64; N_ROW_VALUES]>, SamplerError> {
    if variables.len() != N_ROW_VALUES {
        return Err(SamplerError::Other(format!(
            "Expected {} variables, got {}",
            N_ROW_VALUES,
            variables.len()
        )));
    }
    let buffers = data.get(BUFFER).ok_or(SamplerError::IncorrectDataFormat(
        "Missing buffer".to_string(),
    ))?;

    let mut row = [0.0; N_ROW_VALUES];
    for (value, var) in row.iter_mut().zip(variables.iter()) {
        let buffer = buffers
            .get(*var)
            .and_then(|v| v.get(BUFFER))
            .and_then(|v| v.as_array())
            .ok_or(SamplerError::IncorrectDataFormat(format!(
                "Missing buffer for {}",
                var
            )))?;
        match buffer.last().and_then(|v| v.as_f64()) {
            Some(last) => *value = last,
            None => return Ok(None),
        }
    }
    Ok(Some(row))
}

/// Names listed in the `buffers` section of the phyphox `/config` response.
pub(crate) fn get_buffer_names(config: &Value) -> Result<Vec<String>, SamplerError> {
    let buffers = config
        .get(BUFFERS)
        .and_then(|b| b.as_array())
        .ok_or(SamplerError::IncorrectDataFormat(
            "Missing buffers".to_string(),
        ))?;
    Ok(buffers
        .iter()
        .filter_map(|entry| entry.get(NAME).and_then(|n| n.as_str()))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const VARIABLES: [&str; N_ROW_VALUES] = [
        "accX", "accY", "accZ", "gyroX", "gyroY", "gyroZ", "attW", "attX", "attY", "attZ",
    ];

    fn response(values: [Vec<f64>; N_ROW_VALUES], measuring: bool) -> Value {
        let mut buffers = serde_json::Map::new();
        for (var, buffer) in VARIABLES.iter().zip(values) {
            buffers.insert(
                var.to_string(),
                json!({ "buffer": buffer, "size": 0, "updateMode": "single" }),
            );
        }
        json!({ "buffer": buffers, "status": { "measuring": measuring } })
    }

    #[test]
    fn test_build_query() {
        assert_eq!(build_query(&["accX", "accY"]), "accX&accY");
    }

    #[test]
    fn test_status() {
        let data = response(Default::default(), true);
        assert!(get_status_from_json(&data).unwrap());
        assert!(get_status_from_json(&json!({})).is_err());
    }

    #[test]
    fn test_parse_latest_takes_last_value() {
        let values: [Vec<f64>; N_ROW_VALUES] =
            std::array::from_fn(|i| vec![-1.0, i as f64 + 0.5]);
        let data = response(values, true);
        let row = parse_latest(&data, &VARIABLES).unwrap().unwrap();
        assert_eq!(row, [0.5, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5, 8.5, 9.5]);
    }

    #[test]
    fn test_parse_latest_empty_buffer() {
        let mut values: [Vec<f64>; N_ROW_VALUES] = std::array::from_fn(|_| vec![1.0]);
        values[4] = vec![];
        let data = response(values, true);
        assert_eq!(parse_latest(&data, &VARIABLES).unwrap(), None);
    }

    #[test]
    fn test_parse_latest_missing_buffer() {
        let data = json!({ "buffer": { "accX": { "buffer": [1.0] } }, "status": { "measuring": true } });
        assert!(matches!(
            parse_latest(&data, &VARIABLES),
            Err(SamplerError::IncorrectDataFormat(_))
        ));
        assert!(parse_latest(&json!({}), &VARIABLES).is_err());
    }

    #[test]
    fn test_buffer_names() {
        let config = json!({ "buffers": [{ "name": "accX", "size": 0 }, { "name": "gyroX" }] });
        assert_eq!(get_buffer_names(&config).unwrap(), vec!["accX", "gyroX"]);
        assert!(get_buffer_names(&json!({ "export": [] })).is_err());
    }
}
