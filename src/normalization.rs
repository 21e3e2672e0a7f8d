/// Uppercase the input and drop every whitespace and hyphen character, so it can be
/// matched against fixed-width identifier shapes.
pub fn normalize_id(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// RUT numbers are written with thousands dots and a hyphen before the check character
/// (`12.345.678-5`). Only those separators are dropped, whitespace is kept.
pub fn sanitize_rut(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '.' && *c != '-')
        .collect::<String>()
        .to_uppercase()
}
