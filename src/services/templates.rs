use rand::Rng;

/// System instruction for the mystic path.
pub const ORDER_VOICE: &str =
    "You are the voice of the Order of Secrets. Speak in cryptic, wise tones.";

/// System instruction for trivial questions; the sarcasm is added afterwards.
pub const PLAIN_ANSWER: &str =
    "Answer the question plainly and briefly, in one or two sentences. No flourishes.";

pub const MATH_INTROS: &[&str] = &[
    "The Order does not waste ancient wisdom on arithmetic, but very well.",
    "You summoned the keepers of forbidden knowledge for this? Fine.",
    "Even the initiates' pet ravens know this one.",
    "A calculator would have sufficed, Seeker.",
    "The stars sigh. They counted for you anyway.",
];

pub const UNIT_INTROS: &[&str] = &[
    "The Order measures souls, not centimeters. Still:",
    "A ruler, Seeker. They sell them everywhere. Nevertheless:",
    "The hourglass of eternity grumbles, but answers:",
    "Such mundane units for such an ancient Order. Behold:",
];

pub const TRIVIAL_INTROS: &[&str] = &[
    "Ah, a question of staggering depth. Not.",
    "The Order's vaults hold the secrets of ages, and you ask this.",
    "Any village child could tell you, Seeker.",
    "The oracle rolls her eyes, then answers:",
    "This secret is so well kept that everyone knows it.",
    "Very well, since the scrolls are already open:",
];

/// Chooses which of several equivalent templates to use.
pub trait TemplatePicker: Send + Sync {
    /// Return an index below `len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random choice.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl TemplatePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always the same index (modulo the list length). Tests use it to pin wording.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl TemplatePicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

pub fn choose<'a>(picker: &dyn TemplatePicker, options: &[&'a str]) -> &'a str {
    match options.len() {
        0 => "",
        len => options[picker.pick(len).min(len - 1)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_picker_is_deterministic() {
        assert_eq!(choose(&FixedPicker(0), MATH_INTROS), MATH_INTROS[0]);
        assert_eq!(choose(&FixedPicker(2), UNIT_INTROS), UNIT_INTROS[2]);
        assert_eq!(choose(&FixedPicker(UNIT_INTROS.len()), UNIT_INTROS), UNIT_INTROS[0]);
    }

    #[test]
    fn random_picker_stays_in_bounds() {
        for _ in 0..200 {
            let intro = choose(&RandomPicker, TRIVIAL_INTROS);
            assert!(TRIVIAL_INTROS.contains(&intro));
        }
    }

    #[test]
    fn every_mundane_list_has_four_to_seven_options() {
        for list in [MATH_INTROS, UNIT_INTROS, TRIVIAL_INTROS] {
            assert!((4..=7).contains(&list.len()));
        }
    }
}
