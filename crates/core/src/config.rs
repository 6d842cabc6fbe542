/// Port used when `PORT` is unset or unusable
pub const DEFAULT_PORT: u16 = 3000;

/// Parse a port value, falling back to [`DEFAULT_PORT`] instead of failing
pub fn resolve_port(raw: &str) -> u16 {
    raw.trim().parse::<u16>().unwrap_or(DEFAULT_PORT)
}
