//! Tests for the text parser.

use crate::error::{Error, ParseError, ParseErrorKind};
use crate::model::{Comment, Configuration, Element};
use crate::options::ParseOptions;

fn parse(source: &str) -> Configuration {
    super::parse(source, &ParseOptions::default()).unwrap()
}

fn parse_err(source: &str) -> ParseError {
    match super::parse(source, &ParseOptions::default()) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

fn raw<'c>(config: &'c Configuration, section: &str, setting: &str) -> &'c str {
    config
        .section(section)
        .unwrap()
        .setting(setting)
        .unwrap()
        .raw_value()
}

mod structure {
    use super::*;

    #[test]
    fn section_with_commented_setting() {
        let config = parse("[General]\nName=John ; the user's name");

        let general = config.section("General").unwrap();
        assert_eq!(general.len(), 1);

        let name = general.setting("Name").unwrap();
        assert_eq!(name.raw_value(), "John");
        assert_eq!(
            name.comment(),
            Some(&Comment::new(';', "the user's name").unwrap())
        );
    }

    #[test]
    fn empty_source_gives_empty_configuration() {
        assert!(parse("").is_empty());
        assert!(parse("\n   \n\t\n").is_empty());
    }

    #[test]
    fn keeps_section_and_setting_order() {
        let config = parse("[B]\nz=1\na=2\n[A]\nm=3");

        let names: Vec<_> = config.iter().map(Element::name).collect();
        assert_eq!(names, ["B", "A"]);

        let settings: Vec<_> = config.sections()[0].iter().map(Element::name).collect();
        assert_eq!(settings, ["z", "a"]);
    }

    #[test]
    fn trims_names_and_values() {
        let config = parse("  [  My Section  ]  \n   Key   =   some value   ");

        assert_eq!(raw(&config, "My Section", "Key"), "some value");
    }

    #[test]
    fn splits_on_first_equals_sign() {
        let config = parse("[Net]\nUrl=http://host/?a=b");

        assert_eq!(raw(&config, "Net", "Url"), "http://host/?a=b");
    }

    #[test]
    fn empty_value_is_allowed() {
        let config = parse("[A]\nKey=");

        assert_eq!(raw(&config, "A", "Key"), "");
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let config = parse("[A]\r\nx=1\r\ny=2\r\n");

        assert_eq!(raw(&config, "A", "x"), "1");
        assert_eq!(raw(&config, "A", "y"), "2");
    }

    #[test]
    fn accepts_lone_cr_line_endings() {
        let config = parse("[A]\rK=1\r");

        assert_eq!(raw(&config, "A", "K"), "1");
    }

    #[test]
    fn mixed_line_endings_keep_line_numbers() {
        let config = parse("[A]\rx=1\r\ny=2\n\rz=3");

        assert_eq!(raw(&config, "A", "z"), "3");

        let err = parse_err("[A]\rx=1\r\n\n\rbroken");
        assert_eq!(err.line, 5);
        assert_eq!(err.kind, ParseErrorKind::AssignmentExpected);
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let config = parse("[General]\nName=John");

        assert_eq!(raw(&config, "GENERAL", "name"), "John");
    }
}

mod continuation {
    use super::*;

    #[test]
    fn joins_lines_with_crlf() {
        let config = parse("[S]\nText=a\n...b\n...c");

        assert_eq!(raw(&config, "S", "Text"), "a\r\nb\r\nc");
    }

    #[test]
    fn applies_to_last_setting_of_last_section() {
        let config = parse("[S]\nfirst=1\nsecond=2\n...more");

        assert_eq!(raw(&config, "S", "first"), "1");
        assert_eq!(raw(&config, "S", "second"), "2\r\nmore");
    }

    #[test]
    fn continuation_text_is_verbatim() {
        let config = parse("[S]\nText=a\n...; not a comment");

        assert_eq!(raw(&config, "S", "Text"), "a\r\n; not a comment");
    }

    #[test]
    fn without_any_setting_fails() {
        let err = parse_err("...orphan");
        assert_eq!(err.line, 1);
        assert_eq!(err.kind, ParseErrorKind::ContinuationWithoutSetting);

        let err = parse_err("[Empty]\n...orphan");
        assert_eq!(err.line, 2);
        assert_eq!(err.kind, ParseErrorKind::ContinuationWithoutSetting);
    }
}

mod comments {
    use super::*;

    #[test]
    fn collects_pre_comments() {
        let config = parse("# top\n; second\n[A]\n' about x\nx=1");

        let section = config.section("A").unwrap();
        assert_eq!(
            section.pre_comments(),
            [
                Comment::new('#', "top").unwrap(),
                Comment::new(';', "second").unwrap()
            ]
        );

        let setting = section.setting("x").unwrap();
        assert_eq!(setting.pre_comments(), [Comment::new('\'', "about x").unwrap()]);
    }

    #[test]
    fn section_inline_comment() {
        let config = parse("[A] # the A section");

        let section = config.section("A").unwrap();
        assert_eq!(section.comment().unwrap().text(), "the A section");
    }

    #[test]
    fn delimiter_inside_quotes_is_kept() {
        let config = parse("[A]\nKey=\"a;b\"");

        let setting = config.section("A").unwrap().setting("Key").unwrap();
        assert_eq!(setting.raw_value(), "\"a;b\"");
        assert!(setting.comment().is_none());
    }

    #[test]
    fn delimiter_after_closing_quote_starts_comment() {
        let config = parse("[A]\nKey=\"a\" ; note");

        let setting = config.section("A").unwrap().setting("Key").unwrap();
        assert_eq!(setting.raw_value(), "\"a\"");
        assert_eq!(setting.comment().unwrap().text(), "note");
    }

    #[test]
    fn quote_check_does_not_pair_quotes() {
        // A quote on each side of the delimiter is enough to protect it.
        let config = parse("[A]\nKey=\"a\" ; \"b\"");

        assert_eq!(raw(&config, "A", "Key"), "\"a\" ; \"b\"");
    }

    #[test]
    fn escaped_delimiter_is_kept() {
        let config = parse("[A]\nPath=C:\\;x");

        assert_eq!(raw(&config, "A", "Path"), "C:\\;x");
    }

    #[test]
    fn scanning_continues_after_escaped_delimiter() {
        let config = parse("[A]\nKey=a\\;b ; real comment");

        let setting = config.section("A").unwrap().setting("Key").unwrap();
        assert_eq!(setting.raw_value(), "a\\;b");
        assert_eq!(setting.comment().unwrap().text(), "real comment");
    }

    #[test]
    fn trailing_comments_are_dropped() {
        let config = parse("[A]\nx=1\n# nothing follows");

        let setting = config.section("A").unwrap().setting("x").unwrap();
        assert!(setting.pre_comments().is_empty());
        assert!(setting.comment().is_none());
    }

    #[test]
    fn custom_comment_chars() {
        let options = ParseOptions::new().with_comment_chars(['%']).unwrap();
        let config = super::super::parse("% note\n[A]\nx=1 # not a comment % comment", &options)
            .unwrap();

        let section = config.section("A").unwrap();
        assert_eq!(section.pre_comments()[0].symbol(), '%');

        let setting = section.setting("x").unwrap();
        assert_eq!(setting.raw_value(), "1 # not a comment");
        assert_eq!(setting.comment().unwrap().text(), "comment");
    }

    #[test]
    fn ignore_inline_comments_keeps_text_in_value() {
        let options = ParseOptions::new().ignore_inline_comments(true);
        let config = super::super::parse("[A]\nx=1 ; two", &options).unwrap();

        let setting = config.section("A").unwrap().setting("x").unwrap();
        assert_eq!(setting.raw_value(), "1 ; two");
        assert!(setting.comment().is_none());
    }

    #[test]
    fn ignore_pre_comments_skips_comment_lines() {
        let options = ParseOptions::new().ignore_pre_comments(true);
        let config = super::super::parse("# top\n[A]\n# above\nx=1", &options).unwrap();

        let section = config.section("A").unwrap();
        assert!(section.pre_comments().is_empty());
        assert!(section.setting("x").unwrap().pre_comments().is_empty());
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_closing_bracket() {
        let err = parse_err("[General");

        assert_eq!(err, ParseError::new(1, ParseErrorKind::MissingClosingBracket));
    }

    #[test]
    fn text_after_section_header() {
        let err = parse_err("[A]\n[B]x");

        assert_eq!(err.line, 2);
        assert_eq!(err.kind, ParseErrorKind::UnexpectedToken("x".to_owned()));
    }

    #[test]
    fn empty_section_name() {
        assert_eq!(parse_err("[]").kind, ParseErrorKind::SectionNameExpected);
        assert_eq!(parse_err("[   ]").kind, ParseErrorKind::SectionNameExpected);
    }

    #[test]
    fn duplicate_section_ignores_case() {
        let err = parse_err("[Video]\nx=1\n[VIDEO]");

        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ParseErrorKind::DuplicateSection("VIDEO".to_owned()));
    }

    #[test]
    fn line_without_assignment() {
        let err = parse_err("[A]\n\njust words");

        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ParseErrorKind::AssignmentExpected);
    }

    #[test]
    fn assignment_without_name() {
        let err = parse_err("[A]\n  = 5");

        assert_eq!(err.line, 2);
        assert_eq!(err.kind, ParseErrorKind::SettingNameExpected);
    }

    #[test]
    fn setting_before_any_section() {
        let err = parse_err("# header\nWidth=1");

        assert_eq!(err.line, 2);
        assert_eq!(
            err.kind,
            ParseErrorKind::SettingOutsideSection("Width".to_owned())
        );
    }

    #[test]
    fn duplicate_setting_ignores_case() {
        let err = parse_err("[A]\nwidth=1\nWIDTH=2");

        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ParseErrorKind::DuplicateSetting("WIDTH".to_owned()));
    }

    #[test]
    fn same_setting_name_in_different_sections() {
        let config = parse("[A]\nx=1\n[B]\nx=2");

        assert_eq!(raw(&config, "A", "x"), "1");
        assert_eq!(raw(&config, "B", "x"), "2");
    }

    #[test]
    fn message_names_the_line() {
        let err = parse_err("[A]\n[B");

        assert!(err.to_string().starts_with("Line 2:"), "{err}");
    }
}
