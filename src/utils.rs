//! Utility functions for field checks and key building

// whitespace-only input counts as missing
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Builds the `sales` tree key: RUT length (u32 big-endian), RUT bytes, then
/// the document number big-endian. The length prefix keeps one RUT from being
/// a key prefix of another, and a prefix scan yields sales in document order.
pub fn sale_key(rut: &str, document_number: u64) -> Vec<u8> {
    let mut key = sale_prefix(rut);
    key.extend_from_slice(&document_number.to_be_bytes());
    key
}

pub fn sale_prefix(rut: &str) -> Vec<u8> {
    let mut prefix = Vec::with_capacity(rut.len() + 12);
    prefix.extend_from_slice(&(rut.len() as u32).to_be_bytes());
    prefix.extend_from_slice(rut.as_bytes());
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn sale_keys_sort_by_document_number() {
        let a = sale_key("1-9", 2);
        let b = sale_key("1-9", 10);
        assert!(a < b);
        assert!(a.starts_with(&sale_prefix("1-9")));
        // no RUT is a prefix match for a longer one
        assert!(!sale_key("1-99", 1).starts_with(&sale_prefix("1-9")));
        assert!(!sale_key("7\0X", 1).starts_with(&sale_prefix("7")));
    }
}
