//! Tests for parse options and number formats.

use super::*;

mod parse_options {
    use super::*;

    #[test]
    fn default_comment_chars() {
        let options = ParseOptions::default();

        assert_eq!(options.comment_chars(), &['#', ';', '\'']);
        assert!(!options.inline_comments_ignored());
        assert!(!options.pre_comments_ignored());
        assert_eq!(*options.number_format(), NumberFormat::invariant());
    }

    #[test]
    fn replace_comment_chars() {
        let options = ParseOptions::new().with_comment_chars(['%', '!']).unwrap();

        assert!(options.is_comment_char('%'));
        assert!(options.is_comment_char('!'));
        assert!(!options.is_comment_char('#'));
    }

    #[test]
    fn empty_comment_chars_rejected() {
        let result = ParseOptions::new().with_comment_chars([]);

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn nul_comment_char_rejected() {
        let result = ParseOptions::new().with_comment_chars(['#', '\0']);

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn flags_are_independent() {
        let options = ParseOptions::new().ignore_pre_comments(true);

        assert!(options.pre_comments_ignored());
        assert!(!options.inline_comments_ignored());
    }
}

mod number_format {
    use super::*;

    #[test]
    fn invariant_uses_dot_and_comma_groups() {
        let format = NumberFormat::invariant();

        assert_eq!(format.decimal_separator(), '.');
        assert_eq!(format.group_separator(), Some(','));
    }

    #[test]
    fn custom_separators() {
        let format = NumberFormat::new(',', Some('.')).unwrap();

        assert_eq!(format.decimal_separator(), ',');
        assert_eq!(format.group_separator(), Some('.'));
    }

    #[test]
    fn equal_separators_rejected() {
        let result = NumberFormat::new(',', Some(','));

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
