//! Tests for atlas text serialization

#[cfg(test)]
mod tests {
    use spritepack::atlas::entry::{AtlasEntry, AtlasHeader};
    use spritepack::atlas::writer::{FORMAT_DESCRIPTION, render_atlas};

    fn header() -> AtlasHeader {
        AtlasHeader {
            image_name: "raven-fantasy-16x16-spritesheet.png".to_string(),
            sheet_size: (48, 32),
            cell_size: (16, 16),
        }
    }

    // Tests the exact header, record layout and single trailing newline
    // Verified by joining records without the final newline
    #[test]
    fn test_render_exact_text() {
        let entries = vec![
            AtlasEntry::new("fa1", 0, 0, 16, 16),
            AtlasEntry::new("weapons/sword", 16, 0, 16, 16),
        ];

        let text = render_atlas(&header(), &entries);

        let expected = "# Sprite Sheet Atlas: raven-fantasy-16x16-spritesheet.png\n\
                        # Total sprites: 2\n\
                        # Sheet size: 48x32\n\
                        # Icon size: 16x16\n\
                        # Format: name\\tx\\ty\\twidth\\theight\n\
                        fa1\t0\t0\t16\t16\n\
                        weapons/sword\t16\t0\t16\t16\n";
        assert_eq!(text, expected);
    }

    // Tests the format line carries literal backslash-t markers, not tabs
    // Verified by writing real tabs into the description
    #[test]
    fn test_format_description_is_literal() {
        assert!(!FORMAT_DESCRIPTION.contains('\t'));
        assert_eq!(FORMAT_DESCRIPTION.matches("\\t").count(), 4);
    }

    // Tests an empty record list ends right after the header
    // Verified by always appending a blank line
    #[test]
    fn test_render_without_records() {
        let text = render_atlas(&header(), &[]);

        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("# Total sprites: 0\n"));
        assert!(text.ends_with("theight\n"));
    }

    // Tests names with spaces and brackets are written verbatim
    // Verified by escaping record names
    #[test]
    fn test_record_names_verbatim() {
        let entries = vec![AtlasEntry::new("water [frame 2]", 64, 32, 32, 32)];
        let text = render_atlas(&header(), &entries);

        assert!(text.ends_with("water [frame 2]\t64\t32\t32\t32\n"));
    }
}
