/// Fixed-point text with ties rounded away from zero ("7.25" to one digit is "7.3").
pub fn fixed(value: f64, digits: u8) -> String {
    let scale = 10f64.powi(i32::from(digits));
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.prec$}", prec = usize::from(digits))
}
