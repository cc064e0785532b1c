use chrono::NaiveDate;
use std::collections::HashMap;
use tera::Value;

const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Render an ISO date the way it is printed on the card. Null stays null.
pub fn display_date(date: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    if date.is_null() {
        return Ok(Value::Null);
    }
    let date: NaiveDate = serde::Deserialize::deserialize(date)?;
    Ok(Value::String(date.format(DISPLAY_DATE_FORMAT).to_string()))
}
