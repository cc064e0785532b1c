use chrono::NaiveDate;

/// Years below this one are read as 20xx, the others as 19xx.
const CENTURY_PIVOT: u32 = 9;
/// Added to the day of birth for female holders.
const FEMALE_DAY_OFFSET: u32 = 40;

/// Extract the birth date encoded in an Italian fiscal code (characters 7 to 11: `YY M DD`).
/// Any code that doesn't carry a consistent date gives `None`.
pub fn birth_date_from_fiscal_code(fiscal_code: &str) -> Option<NaiveDate> {
    let fiscal_code = fiscal_code.trim().to_uppercase();
    let encoded_date = fiscal_code.get(6..11)?;

    let year: u32 = parse_digits(encoded_date.get(0..2)?)?;
    let month = month_from_letter(encoded_date.chars().nth(2)?)?;
    let mut day: u32 = parse_digits(encoded_date.get(3..5)?)?;
    if day > FEMALE_DAY_OFFSET {
        day -= FEMALE_DAY_OFFSET;
    }

    let century = if year < CENTURY_PIVOT { 2000 } else { 1900 };
    NaiveDate::from_ymd_opt((century + year) as i32, month, day)
}

fn parse_digits(digits: &str) -> Option<u32> {
    if digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

fn month_from_letter(letter: char) -> Option<u32> {
    let month = match letter {
        'A' => 1,
        'B' => 2,
        'C' => 3,
        'D' => 4,
        'E' => 5,
        'H' => 6,
        'L' => 7,
        'M' => 8,
        'P' => 9,
        'R' => 10,
        'S' => 11,
        'T' => 12,
        _ => return None,
    };

    Some(month)
}
