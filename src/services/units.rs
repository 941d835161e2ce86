use std::sync::LazyLock;

use regex::Regex;

use super::arithmetic::Number;

pub const CANNOT_HELP: &str = "The Order cannot help you with that conversion.";

static CONNECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:in|to|into)\b").expect("valid connector regex"));

static QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid quantity regex"));

// A unit name may sit flush against its number ("100cm") but not after another
// letter, so "meter" inside "centimeter" is not a mention. Group 1 is the name.
static CENTIMETER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-z])(cm|centimet(?:er|re)s?)\b").expect("valid centimeter regex")
});
static METER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-z])(m|meters?|metres?)\b").expect("valid meter regex")
});
static HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^a-z])(hours?|hrs?)\b").expect("valid hour regex"));
static MINUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-z])(minutes?|mins?)\b").expect("valid minute regex")
});
static SECOND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-z])(seconds?|secs?)\b").expect("valid second regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Centimeter,
    Meter,
    Hour,
    Minute,
    Second,
}

impl Unit {
    fn pattern(self) -> &'static Regex {
        match self {
            Unit::Centimeter => &*CENTIMETER,
            Unit::Meter => &*METER,
            Unit::Hour => &*HOUR,
            Unit::Minute => &*MINUTE,
            Unit::Second => &*SECOND,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Centimeter => "cm",
            Unit::Meter => "meters",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
        }
    }

    fn first_mention(self, text: &str) -> Option<usize> {
        self.pattern()
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.start())
    }
}

#[derive(Debug, Clone, Copy)]
enum Scale {
    Multiply(f64),
    Divide(f64),
}

struct Conversion {
    from: Unit,
    to: Unit,
    scale: Scale,
}

const KNOWN_PAIRS: [(Unit, Unit); 3] = [
    (Unit::Centimeter, Unit::Meter),
    (Unit::Hour, Unit::Second),
    (Unit::Minute, Unit::Second),
];

static CONVERSIONS: [Conversion; 5] = [
    Conversion { from: Unit::Centimeter, to: Unit::Meter, scale: Scale::Divide(100.0) },
    Conversion { from: Unit::Meter, to: Unit::Centimeter, scale: Scale::Multiply(100.0) },
    Conversion { from: Unit::Hour, to: Unit::Second, scale: Scale::Multiply(3600.0) },
    Conversion { from: Unit::Minute, to: Unit::Second, scale: Scale::Multiply(60.0) },
    Conversion { from: Unit::Second, to: Unit::Minute, scale: Scale::Divide(60.0) },
];

/// The first known pair whose two units are both mentioned, with their positions.
fn mentioned_pair(text: &str) -> Option<((Unit, usize), (Unit, usize))> {
    KNOWN_PAIRS.iter().find_map(|&(a, b)| {
        let pa = a.first_mention(text)?;
        let pb = b.first_mention(text)?;
        Some(((a, pa), (b, pb)))
    })
}

/// Connector word plus both units of a known pair. Expects lowercased text.
pub fn mentions_known_pair(text: &str) -> bool {
    CONNECTOR.is_match(text) && mentioned_pair(text).is_some()
}

/// Convert the first quantity in `text`, or explain that the Order cannot.
///
/// The source unit is the first one mentioned after the quantity
/// ("100 cm to meter", "how many seconds in 2 hours"); with no unit after the
/// quantity it is the one mentioned first.
pub fn convert(text: &str) -> String {
    let text = text.to_lowercase();
    let Some(((a, pa), (b, pb))) = mentioned_pair(&text) else {
        return CANNOT_HELP.to_string();
    };
    let Some(quantity) = QUANTITY.find(&text) else {
        return CANNOT_HELP.to_string();
    };

    let after = quantity.end();
    let (from, to) = match (pa >= after, pb >= after) {
        (true, false) => (a, b),
        (false, true) => (b, a),
        (true, true) if pb < pa => (b, a),
        (true, true) => (a, b),
        (false, false) if pb < pa => (b, a),
        (false, false) => (a, b),
    };

    let Some(conversion) = CONVERSIONS.iter().find(|c| c.from == from && c.to == to) else {
        return CANNOT_HELP.to_string();
    };
    let Ok(amount) = quantity.as_str().parse::<f64>() else {
        return CANNOT_HELP.to_string();
    };

    let result = match conversion.scale {
        Scale::Multiply(k) => amount * k,
        Scale::Divide(k) => amount / k,
    };

    format!(
        "{} {} is {} {}.",
        quantity.as_str(),
        from.label(),
        Number::Float(result),
        to.label()
    )
}
