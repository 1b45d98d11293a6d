//! Default values for parse and conversion options, and the fixed
//! markers of the text format.

/// Characters that start a comment unless configured otherwise.
pub const COMMENT_CHARS: [char; 3] = ['#', ';', '\''];

/// Decimal separator of the invariant number format.
pub const DECIMAL_SEPARATOR: char = '.';

/// Digit group separator of the invariant number format.
pub const GROUP_SEPARATOR: char = ',';

/// Marker that continues the previous setting's value on a new line.
pub const CONTINUATION_MARKER: &str = "...";

/// Separator inserted between the lines of a continued value.
pub const CONTINUATION_SEPARATOR: &str = "\r\n";
