use super::progress::DotTrail;

/// Compact number for impact counters ("2.5M", "125.0K", "999")
pub fn format_number(num: u64) -> String {
    if num >= 1_000_000 {
        compact(num, 1_000_000, "M")
    } else if num >= 1_000 {
        compact(num, 1_000, "K")
    } else {
        num.to_string()
    }
}

/// One decimal of `num / unit`, with exact halves rounded up
///
/// `{:.1}` sends an exact half to the even digit (1.25 -> "1.2"). A quotient
/// is an exact binary half only when `4 * num / unit` is an odd integer.
fn compact(num: u64, unit: u64, suffix: &str) -> String {
    let quarters = u128::from(num) * 4;
    let unit_wide = u128::from(unit);
    if quarters % unit_wide == 0 && (quarters / unit_wide) % 2 == 1 {
        let tenths = (u128::from(num) * 10 + unit_wide / 2) / unit_wide;
        return format!("{}.{}{}", tenths / 10, tenths % 10, suffix);
    }
    format!("{:.1}{}", num as f64 / unit as f64, suffix)
}

/// Count with thousands separators ("1,250")
pub fn format_thousands(num: u64) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Signed point delta for the activity log ("+50", "-25")
pub fn points_delta(points: i64) -> String {
    if points >= 0 {
        format!("+{}", points)
    } else {
        points.to_string()
    }
}

/// Checkbox for a task row
pub fn task_check(completed: bool, use_emoji: bool) -> &'static str {
    match (completed, use_emoji) {
        (true, true) => "✅",
        (false, true) => "⬜",
        (true, false) => "[x]",
        (false, false) => "[ ]",
    }
}

/// Render a dot trail as a strip of `width` markers
pub fn dot_strip(trail: &DotTrail, width: usize, use_emoji: bool) -> String {
    let (on, off) = if use_emoji { ("●", "○") } else { ("#", ".") };
    trail
        .flags(width)
        .into_iter()
        .map(|marked| if marked { on } else { off })
        .collect()
}

/// Streak badge shown next to the streak count
pub fn streak_badge(use_emoji: bool) -> &'static str {
    if use_emoji {
        "🔥"
    } else {
        "days"
    }
}
