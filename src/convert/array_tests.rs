//! Tests for array literal handling.

use super::*;
use crate::options::NumberFormat;

mod detection {
    use super::*;

    #[test]
    fn empty_array_has_size_zero() {
        assert_eq!(array_size("{}"), Some(0));
    }

    #[test]
    fn three_elements() {
        assert_eq!(array_size("{1,2,3}"), Some(3));
    }

    #[test]
    fn trailing_comma_is_scalar() {
        assert_eq!(array_size("{1,}"), None);
    }

    #[test]
    fn missing_braces_is_scalar() {
        assert_eq!(array_size("1,2,3"), None);
    }

    #[test]
    fn adjacent_commas_is_scalar() {
        assert_eq!(array_size("{1,,3}"), None);
    }

    #[test]
    fn single_element() {
        assert_eq!(array_size("{abc}"), Some(1));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(array_size("  {1,2}  "), Some(2));
    }

    #[test]
    fn lone_brace_is_scalar() {
        assert_eq!(array_size("{"), None);
        assert_eq!(array_size(""), None);
    }

    #[test]
    fn quoted_commas_still_split() {
        assert_eq!(array_size(r#"{"a,b",c}"#), Some(3));
    }

    #[test]
    fn leading_comma_counts_an_empty_element() {
        assert_eq!(array_size("{,1}"), Some(2));
    }
}

mod splitting {
    use super::*;

    #[test]
    fn elements_keep_inner_whitespace() {
        assert_eq!(array_elements("{1, 2 ,3}"), Some(vec!["1", " 2 ", "3"]));
    }

    #[test]
    fn empty_array_has_no_elements() {
        assert_eq!(array_elements("{}"), Some(vec![]));
    }

    #[test]
    fn scalar_has_no_elements() {
        assert_eq!(array_elements("plain"), None);
    }
}

mod encoding {
    use super::*;

    #[test]
    fn joins_with_commas() {
        assert_eq!(encode_array(&["a", "b"]), "{a,b}");
    }

    #[test]
    fn floats_use_display_form() {
        assert_eq!(encode_array(&[1.5, 2.0]), "{1.5,2}");
    }

    #[test]
    fn empty_renders_braces() {
        assert_eq!(encode_array::<bool>(&[]), "{}");
    }
}

mod dynamic {
    use super::*;

    #[test]
    fn decodes_each_element() {
        let values = decode_array("{1, 2,3}", &ValueKind::Integer, &NumberFormat::invariant())
            .unwrap()
            .unwrap();

        assert_eq!(
            values,
            vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
        );
    }

    #[test]
    fn scalar_text_is_not_an_array() {
        let result = decode_array("1", &ValueKind::Integer, &NumberFormat::invariant()).unwrap();

        assert_eq!(result, None);
    }

    #[test]
    fn failing_element_reports_its_text() {
        let err = decode_array("{1,x,3}", &ValueKind::Integer, &NumberFormat::invariant())
            .unwrap_err();

        assert_eq!(err.raw, "x");
        assert_eq!(err.target, "i64");
    }
}
