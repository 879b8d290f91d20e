/// Binary size units, ordered smallest to largest. Each step is a factor of 1024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Unit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl Unit {
    fn rank(self) -> i32 {
        match self {
            Unit::Bytes     => 0,
            Unit::Kilobytes => 1,
            Unit::Megabytes => 2,
            Unit::Gigabytes => 3,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Bytes     => "B",
            Unit::Kilobytes => "KB",
            Unit::Megabytes => "MB",
            Unit::Gigabytes => "GB",
        }
    }
}

/// Convert `value` expressed in `from` into `to`.
///
/// `convert_unit(2048.0, Unit::Gigabytes, Unit::Megabytes) == 2.0`
pub fn convert_unit(value: f32, to: Unit, from: Unit) -> f32 {
    let steps = to.rank() - from.rank();
    value / 1024f32.powi(steps)
}

/// Format a megabyte quantity in the largest unit that keeps it ≥ 1: "12.50 GB"
pub fn fmt_mb(mb: f32) -> String {
    let gb = convert_unit(mb, Unit::Gigabytes, Unit::Megabytes);
    if gb >= 1.0      { format!("{:.2} {}", gb, Unit::Gigabytes.suffix()) }
    else if mb >= 1.0 { format!("{:.2} {}", mb, Unit::Megabytes.suffix()) }
    else {
        let kb = convert_unit(mb, Unit::Kilobytes, Unit::Megabytes);
        format!("{:.2} {}", kb, Unit::Kilobytes.suffix())
    }
}
