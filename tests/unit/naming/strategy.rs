//! Tests for sprite naming strategies

#[cfg(test)]
mod tests {
    use spritepack::naming::strategy::{NamingStrategy, file_stem};

    fn shout(file_name: &str) -> String {
        file_stem(file_name).to_uppercase()
    }

    fn verbatim(file_name: &str) -> String {
        file_name.to_string()
    }

    // Tests only the final extension is stripped
    // Verified by splitting at the first dot
    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("fa1.png"), "fa1");
        assert_eq!(file_stem("potion.big.png"), "potion.big");
        assert_eq!(file_stem("noext"), "noext");
    }

    // Tests the default strategy names by stem and ignores categories
    // Verified by prefixing the category in FileStem
    #[test]
    fn test_file_stem_strategy() {
        let strategy = NamingStrategy::default();
        assert_eq!(strategy.name("sword.png", None), "sword");
        assert_eq!(strategy.name("sword.png", Some("weapons")), "sword");
    }

    // Tests categorized names join category and stem with a slash
    // Verified by swapping category and stem
    #[test]
    fn test_categorized_strategy() {
        let strategy = NamingStrategy::Categorized;
        assert_eq!(strategy.name("sword.png", Some("weapons")), "weapons/sword");
        assert_eq!(strategy.name("sword.png", None), "sword");
    }

    // Tests custom functions receive the full file name
    // Verified by passing the stem instead
    #[test]
    fn test_custom_strategy() {
        let strategy = NamingStrategy::Custom(shout);
        assert_eq!(strategy.name("fa12.png", Some("ignored")), "FA12");

        let raw = NamingStrategy::Custom(verbatim);
        assert_eq!(raw.name("fa12.png", None), "fa12.png");
    }
}
