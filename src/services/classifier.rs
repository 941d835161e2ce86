use std::sync::LazyLock;

use regex::Regex;

use super::arithmetic::{self, Number};
use super::units;

static MATH_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-*/().\s]+$").expect("valid math regex"));

/// Substrings that mark a question as beneath the Order.
pub const TRIVIAL_KEYWORDS: &[&str] = &[
    "capital of",
    "who is the president",
    "color of the sky",
    "colour of the sky",
    "what is love",
    "what time is it",
    "what day is it",
    "what is the date",
    "weather",
    "how are you",
    "what is your name",
    "how old is",
    "tallest mountain",
    "largest ocean",
    "biggest country",
    "boiling point",
    "speed of light",
    "who invented",
    "who wrote",
    "population of",
    "how many legs",
];

const UNIT_WORDS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS_WORDS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Math,
    UnitConversion,
    Trivial,
    Mystic,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Math => "Math",
            Category::UnitConversion => "UnitConversion",
            Category::Trivial => "Trivial",
            Category::Mystic => "Mystic",
        }
    }
}

/// Outcome of classification. Local paths carry their computed answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Math { expression: String, value: Number },
    UnitConversion { sentence: String },
    Trivial,
    Mystic,
}

impl Route {
    pub fn category(&self) -> Category {
        match self {
            Route::Math { .. } => Category::Math,
            Route::UnitConversion { .. } => Category::UnitConversion,
            Route::Trivial => Category::Trivial,
            Route::Mystic => Category::Mystic,
        }
    }
}

fn unit_value(word: &str) -> Option<u32> {
    UNIT_WORDS.iter().position(|w| *w == word).map(|i| i as u32)
}

fn tens_value(word: &str) -> Option<u32> {
    TENS_WORDS.iter().position(|w| *w == word).map(|i| (i as u32 + 2) * 10)
}

/// Lowercase, turn number and operator words into digits and symbols, and
/// drop a trailing `?` or `=`.
pub fn normalize(text: &str) -> String {
    let lowered = text
        .trim()
        .to_lowercase()
        .trim_end_matches(|c: char| c == '?' || c == '=' || c.is_whitespace())
        .replace("multiplied by", "*")
        .replace("divided by", "/");

    let mut out: Vec<String> = Vec::new();
    let mut words = lowered.split_whitespace().peekable();

    while let Some(word) = words.next() {
        if let Some(tens) = tens_value(word) {
            let ones = words
                .peek()
                .and_then(|next| unit_value(next))
                .filter(|n| (1..10).contains(n));
            if let Some(ones) = ones {
                words.next();
                out.push((tens + ones).to_string());
            } else {
                out.push(tens.to_string());
            }
            continue;
        }

        let mapped = match word {
            "plus" => "+".to_string(),
            "minus" => "-".to_string(),
            "times" => "*".to_string(),
            "over" => "/".to_string(),
            w => match unit_value(w) {
                Some(n) => n.to_string(),
                None => w.to_string(),
            },
        };
        out.push(mapped);
    }

    out.join(" ")
}

/// Only digits, operators, parentheses and whitespace, with at least one
/// digit and one operator.
pub fn is_math_expression(normalized: &str) -> bool {
    MATH_CHARS.is_match(normalized)
        && normalized.chars().any(|c| c.is_ascii_digit())
        && normalized.chars().any(|c| matches!(c, '+' | '-' | '*' | '/'))
}

pub fn is_unit_conversion(text: &str) -> bool {
    units::mentions_known_pair(&text.to_lowercase())
}

pub fn is_trivial(text: &str) -> bool {
    let lowered = text.to_lowercase();
    TRIVIAL_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Walk the classifiers in priority order: math, conversion, trivial, mystic.
///
/// A math match whose evaluation fails falls through to the next classifier.
pub fn route(message: &str) -> Route {
    let normalized = normalize(message);

    if is_math_expression(&normalized) {
        if let Some(value) = arithmetic::evaluate(&normalized) {
            return Route::Math {
                expression: normalized,
                value,
            };
        }
    }

    if is_unit_conversion(&normalized) {
        return Route::UnitConversion {
            sentence: units::convert(&normalized),
        };
    }

    if is_trivial(message.trim()) {
        return Route::Trivial;
    }

    Route::Mystic
}

pub fn classify(message: &str) -> Category {
    route(message).category()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_number_and_operator_words() {
        assert_eq!(normalize("two plus two"), "2 + 2");
        assert_eq!(normalize("Twenty one times three?"), "21 * 3");
        assert_eq!(normalize("ten divided by four ="), "10 / 4");
        assert_eq!(normalize("seventy"), "70");
        assert_eq!(normalize("  2+2  "), "2+2");
    }

    #[test]
    fn math_requires_the_whole_string() {
        assert!(is_math_expression("2+2"));
        assert!(is_math_expression("(1 + 2) * 3"));
        assert!(!is_math_expression("what is 2+2"));
        assert!(!is_math_expression("42"));
        assert!(!is_math_expression("+"));
        assert!(!is_math_expression(""));
    }

    #[test]
    fn priority_order_is_math_conversion_trivial_mystic() {
        assert_eq!(classify("2+2"), Category::Math);
        assert_eq!(classify("two plus two"), Category::Math);
        assert_eq!(classify("100 cm to meter"), Category::UnitConversion);
        assert_eq!(classify("two hours in seconds"), Category::UnitConversion);
        assert_eq!(classify("what is the capital of France"), Category::Trivial);
        assert_eq!(classify("tell me a secret of the universe"), Category::Mystic);
    }

    #[test]
    fn keywords_match_anywhere_in_the_sentence() {
        assert_eq!(
            classify("Before the stars fade, reveal the capital of Peru"),
            Category::Trivial
        );
        assert_eq!(classify("WHAT IS LOVE"), Category::Trivial);
    }

    #[test]
    fn huge_integers_stay_on_the_math_path() {
        assert_eq!(classify("10000000000 * 10000000000"), Category::Math);
        assert_eq!(classify("99999999999999999999+1"), Category::Math);
        assert_eq!(classify("9223372036854775807 + 1"), Category::Math);
    }

    #[test]
    fn units_written_against_numbers_are_conversions() {
        assert_eq!(classify("100cm to meter"), Category::UnitConversion);
        assert_eq!(classify("5m to cm"), Category::UnitConversion);
        assert_eq!(classify("3hours to seconds"), Category::UnitConversion);
    }

    #[test]
    fn failed_evaluation_falls_through() {
        assert_eq!(classify("1/0"), Category::Mystic);
        assert_eq!(classify("2 +"), Category::Mystic);
    }

    #[test]
    fn empty_input_is_mystic() {
        assert_eq!(classify(""), Category::Mystic);
        assert_eq!(classify("   "), Category::Mystic);
    }

    #[test]
    fn math_route_carries_the_value() {
        match route("6 * 7") {
            Route::Math { expression, value } => {
                assert_eq!(expression, "6 * 7");
                assert_eq!(value.to_string(), "42");
            }
            other => panic!("expected math route, got {other:?}"),
        }
    }

    #[test]
    fn conversion_route_uses_normalized_quantities() {
        assert_eq!(
            route("two hours in seconds"),
            Route::UnitConversion {
                sentence: "2 hours is 7200.0 seconds.".to_string()
            }
        );
    }
}
