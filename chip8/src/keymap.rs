/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
///
/// Keys held for a headless run are named by their hex digit.
pub fn keymap(key: char) -> Option<u8> {
    key.to_digit(16).map(|digit| digit as u8)
}

/// Parses a string of hex digits such as `"4a"` into the keys it names.
pub fn parse_keys(keys: &str) -> Result<Vec<u8>, String> {
    keys.chars()
        .map(|key| keymap(key).ok_or_else(|| format!("'{}' is not a key on the keypad", key)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap() {
        assert_eq!(keymap('0'), Some(0x0));
        assert_eq!(keymap('a'), Some(0xA));
        assert_eq!(keymap('F'), Some(0xF));
        assert_eq!(keymap('g'), None);
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(parse_keys("4aF"), Ok(vec![0x4, 0xA, 0xF]));
        assert!(parse_keys("4z").is_err());
    }
}
