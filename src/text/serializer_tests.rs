//! Tests for the serializer and text round trips.

use crate::model::{Comment, Configuration, Element, Section, Setting};
use crate::options::ParseOptions;

fn parse(source: &str) -> Configuration {
    super::parse(source, &ParseOptions::default()).unwrap()
}

mod layout {
    use super::*;

    #[test]
    fn empty_configuration() {
        assert_eq!(super::super::serialize(&Configuration::new()), "");
    }

    #[test]
    fn sections_are_separated_by_blank_lines() {
        let config = parse("[A]\nx=1\ny=2\n[B]\nz=3");

        assert_eq!(config.to_text(), "[A]\nx=1\ny=2\n\n[B]\nz=3\n\n");
    }

    #[test]
    fn pre_comments_get_a_blank_line_before_them() {
        let config = parse("[A]\nx=1\n# about y\ny=2 ; inline\n# about B\n[B]");

        assert_eq!(
            config.to_text(),
            "[A]\nx=1\n\n# about y\ny=2 ; inline\n\n# about B\n[B]\n\n"
        );
    }

    #[test]
    fn never_emits_two_blank_lines_in_a_row() {
        let mut config = Configuration::new();
        let mut section = Section::new("A").unwrap();
        section
            .pre_comments_mut()
            .push(Comment::new('#', "first").unwrap());
        config.add(Section::new("Empty").unwrap()).unwrap();
        config.add(section).unwrap();

        let text = config.to_text();

        assert!(!text.contains("\n\n\n"), "{text:?}");
        assert_eq!(text, "[Empty]\n\n# first\n[A]\n\n");
    }

    #[test]
    fn multi_line_values_use_continuation_lines() {
        let mut config = Configuration::new();
        let section = config.entry("S").unwrap();
        let mut setting = Setting::with_value("Text", "a\r\nb").unwrap();
        setting.set_comment(Some(Comment::new(';', "two lines").unwrap()));
        section.add(setting).unwrap();

        assert_eq!(config.to_text(), "[S]\nText=a ; two lines\n...b\n\n");
    }

    #[test]
    fn display_matches_to_text() {
        let config = parse("# c\n[A]\nx=1");

        assert_eq!(config.to_string(), config.to_text());
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn parse_serialize_parse_is_stable() {
        let source = "\
# Application settings
[General]
Name=John ; the user's name
Tags={a,b,c}

; window geometry
[Window]
Width=800
Text=first
...second
Path=C:\\;x
Quoted=\"a;b\"
";
        let first = parse(source);
        let second = parse(&first.to_text());

        assert_eq!(first, second);
        assert_eq!(second.to_text(), first.to_text());
    }

    #[test]
    fn preserves_comment_symbols() {
        let config = parse("' quote style\n[A]\nx=1 # hash style");
        let again = parse(&config.to_text());

        let section = again.section("A").unwrap();
        assert_eq!(section.pre_comments()[0].symbol(), '\'');
        assert_eq!(section.setting("x").unwrap().comment().unwrap().symbol(), '#');
    }

    #[test]
    fn from_str_uses_default_options() {
        let config: Configuration = "[A]\nx=1 ; c".parse().unwrap();

        assert_eq!(config.section("A").unwrap().setting("x").unwrap().raw_value(), "1");
    }
}
