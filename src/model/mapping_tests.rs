//! Tests for binding sections onto host structs.

use super::{FieldMap, Section, Setting};
use crate::convert::{FromSettingValue, enum_from_name};
use crate::error::{Error, ValueCastError};
use crate::options::NumberFormat;

#[derive(Debug, Default, PartialEq)]
enum Quality {
    #[default]
    Low,
    High,
}

impl FromSettingValue for Quality {
    const TYPE_NAME: &'static str = "Quality";

    fn from_setting_value(raw: &str, _: &NumberFormat) -> Result<Self, ValueCastError> {
        enum_from_name(raw, Self::TYPE_NAME, |name| match name {
            "Low" => Some(Self::Low),
            "High" => Some(Self::High),
            _ => None,
        })
    }
}

#[derive(Debug, Default, PartialEq)]
struct Video {
    width: u32,
    fullscreen: bool,
    quality: Quality,
    ratios: Vec<f64>,
    title: String,
}

fn fields() -> FieldMap<Video> {
    FieldMap::new()
        .field("Width", |v: &mut Video, x| v.width = x)
        .field("Fullscreen", |v: &mut Video, x| v.fullscreen = x)
        .field("Quality", |v: &mut Video, x| v.quality = x)
        .array_field("Ratios", |v: &mut Video, x| v.ratios = x)
        .field("Title", |v: &mut Video, x| v.title = x)
}

fn section(settings: &[(&str, &str)]) -> Section {
    let mut section = Section::new("Video").unwrap();
    for (name, value) in settings {
        section.add(Setting::with_value(*name, *value).unwrap()).unwrap();
    }
    section
}

#[test]
fn fills_every_matching_field() {
    let section = section(&[
        ("Width", "1920"),
        ("Fullscreen", "yes"),
        ("Quality", "Quality.High"),
        ("Ratios", "{1.5,2}"),
        ("Title", "Main"),
    ]);

    let video: Video = section
        .create_object(&fields(), &NumberFormat::invariant())
        .unwrap();

    assert_eq!(
        video,
        Video {
            width: 1920,
            fullscreen: true,
            quality: Quality::High,
            ratios: vec![1.5, 2.0],
            title: "Main".to_owned(),
        }
    );
}

#[test]
fn missing_settings_leave_fields_untouched() {
    let section = section(&[("Width", "800")]);
    let mut video = Video {
        title: "kept".to_owned(),
        ..Video::default()
    };

    let assigned = section
        .map_to(&mut video, &fields(), &NumberFormat::invariant())
        .unwrap();

    assert_eq!(assigned, 1);
    assert_eq!(video.width, 800);
    assert_eq!(video.title, "kept");
}

#[test]
fn names_match_exactly() {
    let section = section(&[("width", "800")]);

    let video: Video = section
        .create_object(&fields(), &NumberFormat::invariant())
        .unwrap();

    assert_eq!(video.width, 0);
}

#[test]
fn conversion_errors_propagate() {
    let section = section(&[("Width", "wide")]);

    let err = section
        .create_object(&fields(), &NumberFormat::invariant())
        .unwrap_err();

    assert!(matches!(err, Error::ValueCast(e) if e.target == "u32"));
}

#[test]
fn unknown_enum_member_names_the_type() {
    let section = section(&[("Quality", "Ultra")]);

    let err = section
        .create_object(&fields(), &NumberFormat::invariant())
        .unwrap_err();

    assert!(matches!(err, Error::ValueCast(e) if e.target == "Quality" && e.raw == "Ultra"));
}

#[test]
fn array_field_requires_array_value() {
    let section = section(&[("Ratios", "1.5")]);

    let err = section
        .create_object(&fields(), &NumberFormat::invariant())
        .unwrap_err();

    assert!(matches!(
        err,
        Error::KindMismatch {
            expected_array: true,
            ..
        }
    ));
}

#[test]
fn uses_the_given_number_format() {
    #[derive(Default)]
    struct Scale {
        factor: f64,
    }

    let fields = FieldMap::new().field("Factor", |s: &mut Scale, x| s.factor = x);
    let section = section(&[("Factor", "1.234,5")]);
    let format = NumberFormat::new(',', Some('.')).unwrap();

    let scale: Scale = section.create_object(&fields, &format).unwrap();

    assert!((scale.factor - 1234.5).abs() < f64::EPSILON);
}

#[test]
fn debug_lists_field_names() {
    let map = fields();

    assert_eq!(map.len(), 5);
    assert!(!map.is_empty());
    assert!(format!("{map:?}").contains("Ratios"));
}
