//! Version command handler

/// Version string reported by `engineyard version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the version line
pub fn print_version() {
    println!("{}", version_line());
}

fn version_line() -> String {
    format!("engineyard version {}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line_format() {
        assert_eq!(
            version_line(),
            concat!("engineyard version ", env!("CARGO_PKG_VERSION"))
        );
    }
}
