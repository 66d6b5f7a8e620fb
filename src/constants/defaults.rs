//! Default option values

/// Plain decimal digits add their face value unless told otherwise
pub const DEFAULT_SUM_PLAIN_DIGITS: bool = true;

/// Expected substrings must fit entirely before the end of the text
pub const DEFAULT_ALLOW_BLEEDING: bool = false;

pub(crate) fn sum_plain_digits() -> bool {
    DEFAULT_SUM_PLAIN_DIGITS
}

pub(crate) fn allow_bleeding() -> bool {
    DEFAULT_ALLOW_BLEEDING
}
