//! 輸入解析（以空白分隔的數值列）

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::{ModelError, Result};

/// 解析以空白分隔的一列數值，數量必須剛好為 `expected_len`
pub fn parse_row(input: &str, expected_len: usize) -> Result<Vec<Decimal>> {
    let values: Vec<&str> = input.split_whitespace().collect();
    if values.len() != expected_len {
        return Err(ModelError::Parse(format!(
            "expected {} values, got {}",
            expected_len,
            values.len()
        )));
    }

    values
        .into_iter()
        .map(parse_value)
        .collect()
}

/// 解析單一數值，接受一般小數與科學記號（如 `1e3`、`2.5E-1`）
fn parse_value(value: &str) -> Result<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|e| ModelError::Parse(format!("無法解析數值 '{}': {}", value, e)))
}

/// 解析維度（資源數或產品數），必須為正整數
pub fn parse_dimension(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<usize>()
        .map_err(|e| ModelError::Parse(format!("無法解析維度 '{}': {}", trimmed, e)))?;

    if value == 0 {
        return Err(ModelError::InvalidDimension("維度必須大於 0".to_string()));
    }
    Ok(value)
}
