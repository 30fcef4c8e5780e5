/// Length of the space-padded ASCII version tag at the start of every `.rm` file.
pub const HEADER_TAG_LEN: usize = 43;

/// Tag plus the little-endian u32 layer count.
pub const HEADER_LEN: usize = HEADER_TAG_LEN + 4;

/// Version 3 tag, space padded to [`HEADER_TAG_LEN`].
pub const TAG_V3: &[u8; HEADER_TAG_LEN] = b"reMarkable .lines file, version=3          ";

/// Version 5 tag, space padded to [`HEADER_TAG_LEN`].
pub const TAG_V5: &[u8; HEADER_TAG_LEN] = b"reMarkable .lines file, version=5          ";

/// Prefix of the version 6 tag. Recognised only to be rejected with a clear message.
pub const TAG_V6_PREFIX: &[u8] = b"reMarkable .lines file, version=6";

/// Divisor applied to every computed stroke width to match an A4 page.
pub const A4_CALIBRATION: f64 = 2.3;

/// Extra width factor for ballpoint/fineliner strokes on the device canvas.
pub const CANONICAL_PEN_BOOST: f64 = 1.8;

/// Name of the single style group created per tool.
pub const DEFAULT_GROUP: &str = "default";

/// Decimal digits kept in every serialized coordinate, width and opacity.
pub const DECIMAL_PLACES: usize = 3;
